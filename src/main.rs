use std::{fs::File, io, sync::Mutex};

use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal::supports_keyboard_enhancement,
    ExecutableCommand,
};
use tracing::{debug, error, info};

mod app;
mod backend;
mod ball;
mod collision;
mod config;
mod game;
mod helpers;
mod player;
mod render;
mod terminal;
mod theme;

use crate::config::Config;

/// Logs go to a file since the terminal is busy drawing the court. Nothing
/// is recorded unless `RUST_LOG` is set.
fn init_tracing() {
    let Ok(filter) = tracing_subscriber::EnvFilter::try_from_default_env() else {
        return;
    };
    let path = std::env::temp_dir().join("pong.log");
    let Ok(file) = File::create(&path) else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}

fn main() -> io::Result<()> {
    init_tracing();

    let mut terminal = ratatui::init();
    let mut stdout = io::stdout();

    let reports_release = supports_keyboard_enhancement().unwrap_or(false)
        && stdout
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    debug!(reports_release, "keyboard enhancement");

    let app_result = app::run(&mut terminal, Config::new(), reports_release);

    let pop_result = if reports_release {
        stdout.execute(PopKeyboardEnhancementFlags).map(|_| ())
    } else {
        Ok(())
    };
    ratatui::restore();

    match &app_result {
        Ok(game) => {
            let (left, right) = game.scores();
            info!(left, right, "exit");
            println!("Thanks for playing turn.pong!");
            println!("Final Score: {} - {}", left, right);
        }
        Err(e) => {
            error!(%e, "game loop failed");
            eprintln!("Game ended with error: {}", e);
        }
    }

    app_result?;
    pop_result
}
