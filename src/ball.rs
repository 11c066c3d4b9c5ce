use glam::Vec2;
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub position: Vec2,
    pub radius: f32,
    /// Units per second.
    pub velocity: Vec2,
}

impl Ball {
    pub fn new(position: Vec2, radius: f32, velocity: Vec2) -> Self {
        Self {
            position,
            radius,
            velocity,
        }
    }

    /// Explicit Euler step.
    pub fn advance(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }
}

/// Unit vector pointing left or right with equal odds, tilted off the
/// horizontal by an angle drawn uniformly from `[-max_angle / 2, max_angle / 2]`.
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R, max_angle: f32) -> Vec2 {
    let spread: f32 = rng.random();
    let x = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    let angle = (spread - 0.5) * max_angle;
    Vec2::new(x, angle.sin()).normalize()
}
