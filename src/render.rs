use glam::Vec2;

use crate::{backend::Painter, game::Game, player::Side, theme::ThemeColors};

pub const HUD_TEXT_SIZE: f32 = 20.0;
pub const SCORE_TEXT_SIZE: f32 = 32.0;
/// Text at least this large is drawn as a headline.
pub const HEADLINE_TEXT_SIZE: f32 = 48.0;

pub const GAME_OVER_TEXT: &str = "GAME OVER";

/// Draw one frame of `game`.
pub fn render_game<P: Painter + ?Sized>(
    game: &Game,
    fps: u32,
    colors: &ThemeColors,
    painter: &mut P,
) {
    let config = game.config();
    let screen = config.screen;

    painter.clear(colors.background);

    for side in [Side::Left, Side::Right] {
        let color = if side == game.active() && !game.is_over() {
            colors.paddle_active
        } else {
            colors.paddle
        };
        painter.fill_rect(game.player(side).position, config.paddle_size, color);
    }

    let ball = game.ball();
    painter.fill_circle(ball.position, ball.radius, colors.ball);

    painter.text(
        Vec2::new(screen.x / 2.0, 8.0),
        HUD_TEXT_SIZE,
        &format!("{fps} FPS"),
        colors.accent,
    );

    let (left, right) = game.scores();
    painter.text(
        Vec2::new(screen.x / 2.0, 32.0),
        SCORE_TEXT_SIZE,
        &format!("Score: {left} - {right}"),
        colors.text,
    );

    if game.is_over() {
        let size = HEADLINE_TEXT_SIZE;
        painter.text(
            Vec2::new(screen.x / 2.0, screen.y / 2.0 - size / 2.0),
            size,
            GAME_OVER_TEXT,
            colors.text,
        );
    }
}
