use std::{
    io,
    time::{Duration, Instant},
};

use ratatui::DefaultTerminal;
use tracing::info;

use crate::{
    backend::{DrawList, FrameClock, InputState},
    config::Config,
    game::Game,
    render::render_game,
    terminal::{draw_resize_warning, draw_scene, fits, poll_keys, KeyTracker},
    theme::ThemeColors,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// The last frame stays on screen until `until`.
    GameOverPending { until: Instant },
    Exited,
}

/// A round plus the loop state wrapped around it.
#[derive(Debug)]
pub struct Session {
    game: Game,
    state: LoopState,
    hold: Duration,
}

impl Session {
    pub fn new(game: Game) -> Self {
        let hold = game.config().game_over_hold;
        Self {
            game,
            state: LoopState::Running,
            hold,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    #[cfg(test)]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Run one frame of the state machine at time `now`.
    pub fn tick(&mut self, input: &InputState, now: Instant) -> LoopState {
        self.state = match self.state {
            LoopState::Running if input.quit => {
                info!(frame = self.game.frame(), "quit requested");
                LoopState::Exited
            }
            LoopState::Running => {
                let collisions = self.game.step(input.held);
                if collisions.boundary_exit {
                    LoopState::GameOverPending {
                        until: now + self.hold,
                    }
                } else {
                    LoopState::Running
                }
            }
            LoopState::GameOverPending { until } if now >= until => LoopState::Exited,
            pending @ LoopState::GameOverPending { .. } => pending,
            LoopState::Exited => LoopState::Exited,
        };
        self.state
    }
}

/// Play one round on `terminal`. Returns the finished game.
pub fn run(
    terminal: &mut DefaultTerminal,
    config: Config,
    reports_release: bool,
) -> io::Result<Game> {
    let colors = ThemeColors::classic();
    let screen = config.screen;
    let mut clock = FrameClock::new(config.target_fps);
    let mut keys = KeyTracker::new(reports_release);
    let mut session = Session::new(Game::new(config, &mut rand::rng()));

    loop {
        poll_keys(&mut keys)?;
        let now = Instant::now();
        let input = keys.snapshot(now);

        let size = terminal.size()?;
        if !fits(size.width, size.height) {
            if input.quit {
                break;
            }
            terminal.draw(|frame| draw_resize_warning(frame, &colors))?;
            clock.tick();
            continue;
        }

        let state = session.tick(&input, now);
        if state == LoopState::Exited {
            break;
        }

        let mut scene = DrawList::default();
        render_game(session.game(), clock.fps(), &colors, &mut scene);
        terminal.draw(|frame| draw_scene(frame, &scene, screen, &colors))?;

        match state {
            LoopState::GameOverPending { until } => clock.block_until(until),
            _ => clock.tick(),
        }
    }

    Ok(session.game)
}
