use std::time::Duration;

use glam::Vec2;

/// Game tuning parameters. Coordinates are in virtual screen units,
/// y grows downwards.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;
    pub const PADDING: f32 = 16.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 16.0;
    pub const PADDLE_HEIGHT: f32 = 128.0;
    pub const PADDLE_MAX_SPEED: f32 = 650.0;
    pub const PADDLE_MAX_TIMER: f32 = 0.15;

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED_INITIAL: f32 = 650.0;
    pub const BALL_SPEED_INCREMENT: f32 = 2.0;

    // Loop
    pub const TARGET_FPS: u32 = 120;
    pub const FIXED_DT: f32 = 1.0 / 120.0;
    pub const GAME_OVER_HOLD_MS: u64 = 1000;
}

/// Ramp-up curve of a paddle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleTuning {
    pub max_speed: f32,
    /// Hold time after which the paddle reaches `max_speed`. Must be non-zero.
    pub max_timer: f32,
}

impl Default for PaddleTuning {
    fn default() -> Self {
        Self {
            max_speed: Params::PADDLE_MAX_SPEED,
            max_timer: Params::PADDLE_MAX_TIMER,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub screen: Vec2,
    pub padding: f32,
    pub paddle_size: Vec2,
    pub paddle: PaddleTuning,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_increment: f32,
    pub target_fps: u32,
    pub fixed_dt: f32,
    pub game_over_hold: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen: Vec2::new(Params::SCREEN_WIDTH, Params::SCREEN_HEIGHT),
            padding: Params::PADDING,
            paddle_size: Vec2::new(Params::PADDLE_WIDTH, Params::PADDLE_HEIGHT),
            paddle: PaddleTuning::default(),
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            target_fps: Params::TARGET_FPS,
            fixed_dt: Params::FIXED_DT,
            game_over_hold: Duration::from_millis(Params::GAME_OVER_HOLD_MS),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_config(self)
    }

    /// Top-left corner of a paddle at round start.
    pub fn paddle_start(&self, left: bool) -> Vec2 {
        let x = if left {
            self.padding
        } else {
            self.screen.x - self.paddle_size.x - self.padding
        };
        let y = self.screen.y / 2.0 - self.paddle_size.y / 2.0 - self.padding;
        Vec2::new(x, y)
    }

    pub fn ball_start(&self) -> Vec2 {
        self.screen / 2.0 - Vec2::splat(self.ball_radius)
    }
}

/// Values derived once from [`Config`] and never touched again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub padding: f32,
    /// Largest x a paddle's top-left corner may take.
    pub width_bound: f32,
    /// Largest y a paddle's top-left corner may take.
    pub height_bound: f32,
    /// Full width of the serve cone in radians.
    pub max_angle: f32,
}

impl Bounds {
    pub fn from_config(config: &Config) -> Self {
        Self {
            padding: config.padding,
            width_bound: config.screen.x - config.paddle_size.x - config.padding,
            height_bound: config.screen.y - config.paddle_size.y - config.padding,
            max_angle: 2.0 * (config.screen.y / config.screen.x).atan(),
        }
    }

    pub fn clamp_y(&self, y: f32) -> f32 {
        y.clamp(self.padding, self.height_bound)
    }

    pub fn clamp_x(&self, x: f32) -> f32 {
        x.clamp(self.padding, self.width_bound)
    }
}
