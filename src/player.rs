use glam::Vec2;

use crate::config::{Bounds, PaddleTuning};

/// Which paddle currently accepts input and can be hit by the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    /// The side a ball travelling with horizontal velocity `vx` is heading to.
    pub fn receiving(vx: f32) -> Self {
        if vx < 0.0 {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// Vertical direction requested by the player, in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Down => 1.0,
        }
    }
}

/// The part of a paddle's state that changes frame to frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub y: f32,
    pub direction: f32,
    pub timer: f32,
}

/// Paddle speed for a given accumulated hold time: a square-root ease-in
/// that saturates at `max_speed`.
pub fn ramp_speed(timer: f32, tuning: &PaddleTuning) -> f32 {
    let t = (timer / tuning.max_timer).clamp(0.0, 1.0);
    tuning.max_speed * t.sqrt()
}

/// Advance one paddle by one frame.
///
/// Only an active paddle with a held key builds up `timer`; every other case
/// lets it decay at the same rate while the paddle keeps gliding in its last
/// direction. The result is clamped to the playable band.
pub fn step_motion(
    prior: Motion,
    held: Option<Direction>,
    is_active: bool,
    dt: f32,
    tuning: &PaddleTuning,
    bounds: &Bounds,
) -> Motion {
    let (timer, direction) = match held.filter(|_| is_active) {
        Some(dir) => ((prior.timer + dt).min(tuning.max_timer), dir.sign()),
        None => ((prior.timer - dt).max(0.0), prior.direction),
    };

    let speed = ramp_speed(timer, tuning);
    let y = bounds.clamp_y(prior.y + speed * dt * direction);

    Motion {
        y,
        direction,
        timer,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner of the paddle.
    pub position: Vec2,
    pub direction: f32,
    pub timer: f32,
    pub score: u32,
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            direction: 1.0,
            timer: 0.0,
            score: 0,
        }
    }

    pub fn motion(&self) -> Motion {
        Motion {
            y: self.position.y,
            direction: self.direction,
            timer: self.timer,
        }
    }

    #[cfg(test)]
    pub fn speed(&self, tuning: &PaddleTuning) -> f32 {
        ramp_speed(self.timer, tuning)
    }

    pub fn update(
        &mut self,
        dt: f32,
        bounds: &Bounds,
        tuning: &PaddleTuning,
        held: Option<Direction>,
        is_active: bool,
    ) {
        let next = step_motion(self.motion(), held, is_active, dt, tuning, bounds);
        self.position.x = bounds.clamp_x(self.position.x);
        self.position.y = next.y;
        self.direction = next.direction;
        self.timer = next.timer;
    }

    pub fn rect(&self, size: Vec2) -> Rect {
        Rect {
            min: self.position,
            size,
        }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    const DT: f32 = 1.0 / 120.0;

    fn setup() -> (Config, Bounds) {
        let config = Config::default();
        let bounds = config.bounds();
        (config, bounds)
    }

    #[test]
    fn speed_is_zero_at_rest() {
        let (config, _) = setup();
        assert_eq!(ramp_speed(0.0, &config.paddle), 0.0);
    }

    #[test]
    fn speed_is_monotonic_in_hold_time() {
        let (config, _) = setup();
        let tuning = config.paddle;
        let mut last = 0.0;
        for i in 1..=100 {
            let t = tuning.max_timer * i as f32 / 100.0;
            let speed = ramp_speed(t, &tuning);
            assert!(speed >= last);
            last = speed;
        }
        assert!((last - tuning.max_speed).abs() < 1e-3);
    }

    #[test]
    fn holding_saturates_at_max_speed() {
        let (config, bounds) = setup();
        let tuning = config.paddle;
        let mut player = Player::new(config.paddle_start(true));
        player.position.y = bounds.height_bound;

        for _ in 0..60 {
            player.update(DT, &bounds, &tuning, Some(Direction::Up), true);
            assert!(player.speed(&tuning) <= tuning.max_speed);
        }
        assert_eq!(player.timer, tuning.max_timer);
        assert_eq!(player.speed(&tuning), tuning.max_speed);
    }

    #[test]
    fn never_accelerates_instantly() {
        let (config, bounds) = setup();
        let tuning = config.paddle;
        let start = config.paddle_start(true);
        let mut player = Player::new(start);

        player.update(DT, &bounds, &tuning, Some(Direction::Down), true);
        let moved = player.position.y - start.y;
        assert!(moved > 0.0);
        assert!(moved < tuning.max_speed * DT);
    }

    #[test]
    fn release_glides_to_a_halt() {
        let (config, bounds) = setup();
        let tuning = config.paddle;
        let mut player = Player::new(config.paddle_start(true));

        for _ in 0..6 {
            player.update(DT, &bounds, &tuning, Some(Direction::Up), true);
        }
        let mut last_speed = player.speed(&tuning);
        let mut last_y = player.position.y;

        player.update(DT, &bounds, &tuning, None, true);
        assert!(player.position.y < last_y, "paddle keeps moving after release");
        assert!(player.speed(&tuning) < last_speed);

        for _ in 0..60 {
            last_speed = player.speed(&tuning);
            last_y = player.position.y;
            player.update(DT, &bounds, &tuning, None, true);
            assert!(player.speed(&tuning) <= last_speed);
            assert!(player.position.y <= last_y);
        }
        assert_eq!(player.timer, 0.0);
        assert_eq!(player.speed(&tuning), 0.0);
    }

    #[test]
    fn inactive_paddle_ignores_input_but_keeps_momentum() {
        let (config, bounds) = setup();
        let tuning = config.paddle;
        let mut player = Player::new(config.paddle_start(false));
        player.timer = tuning.max_timer;
        player.direction = 1.0;
        let y = player.position.y;

        player.update(DT, &bounds, &tuning, Some(Direction::Up), false);
        assert!(player.timer < tuning.max_timer);
        assert_eq!(player.direction, 1.0);
        assert!(player.position.y > y);
    }

    #[test]
    fn idle_inactive_paddle_stays_put() {
        let (config, bounds) = setup();
        let tuning = config.paddle;
        let start = config.paddle_start(false);
        let mut player = Player::new(start);

        player.update(DT, &bounds, &tuning, Some(Direction::Down), false);
        assert_eq!(player.position, start);
        assert_eq!(player.timer, 0.0);
    }

    #[test]
    fn position_stays_clamped_for_all_frames() {
        let (config, bounds) = setup();
        let tuning = config.paddle;
        let mut player = Player::new(config.paddle_start(true));

        let pattern = [
            Some(Direction::Up),
            Some(Direction::Up),
            None,
            Some(Direction::Down),
        ];
        for frame in 0..2_000 {
            let held = pattern[(frame / 90) % pattern.len()];
            let is_active = frame % 500 < 400;
            player.update(DT, &bounds, &tuning, held, is_active);
            assert!(player.position.y >= bounds.padding);
            assert!(player.position.y <= bounds.height_bound);
            assert!(player.timer >= 0.0 && player.timer <= tuning.max_timer);
        }
    }

    #[test]
    fn step_motion_matches_hand_computed_frame() {
        let (config, bounds) = setup();
        let tuning = config.paddle;
        let prior = Motion {
            y: 300.0,
            direction: 1.0,
            timer: 0.0,
        };

        let next = step_motion(prior, Some(Direction::Up), true, DT, &tuning, &bounds);
        let expected_speed = tuning.max_speed * (DT / tuning.max_timer).sqrt();
        assert_eq!(next.direction, -1.0);
        assert_eq!(next.timer, DT);
        assert!((next.y - (300.0 - expected_speed * DT)).abs() < 1e-4);
    }

    #[test]
    fn sides_flip() {
        assert_eq!(Side::Left.other(), Side::Right);
        assert_eq!(Side::Right.other().other(), Side::Right);
        assert_eq!(Side::receiving(-3.0), Side::Left);
        assert_eq!(Side::receiving(3.0), Side::Right);
    }
}
