//! Ball against the active paddle, the top/bottom walls and the left/right
//! boundaries.

use glam::Vec2;

use crate::{ball::Ball, player::Rect};

/// What happened to the ball during one resolver pass.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Collisions {
    pub paddle_hit: bool,
    pub wall_bounce: bool,
    pub boundary_exit: bool,
}

/// Circle against axis-aligned rectangle, corners included.
pub fn circle_hits_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let half = rect.size / 2.0;
    let d = (center - rect.center()).abs();

    if d.x > half.x + radius || d.y > half.y + radius {
        return false;
    }
    if d.x <= half.x || d.y <= half.y {
        return true;
    }

    (d - half).length_squared() <= radius * radius
}

/// Vertical velocity after a paddle hit: a centre hit returns the ball flat,
/// hits near the ends send it off at up to `ball_speed` vertically.
pub fn deflect_y(ball_y: f32, paddle: &Rect, ball_speed: f32) -> f32 {
    let hit_position = (ball_y - paddle.min.y) / paddle.size.y;
    (hit_position - 0.5) * 2.0 * ball_speed
}

/// Reflect the ball off `paddle` if they touch. Returns true on a hit.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Rect, ball_speed: f32) -> bool {
    if !circle_hits_rect(ball.position, ball.radius, paddle) {
        return false;
    }

    ball.velocity.x = -ball.velocity.x;
    ball.velocity.y = deflect_y(ball.position.y, paddle, ball_speed);
    true
}

/// Elastic bounce off the top and bottom of the court.
///
/// Only a ball still moving into the wall is reflected, so a ball that
/// overshoots by more than one frame cannot flip back and forth.
pub fn bounce_off_walls(ball: &mut Ball, padding: f32, screen_height: f32) -> bool {
    let y = ball.position.y;
    let vy = ball.velocity.y;

    let into_top = y <= padding && vy < 0.0;
    let into_bottom = y >= screen_height - padding && vy > 0.0;
    if into_top || into_bottom {
        ball.velocity.y = -vy;
        return true;
    }
    false
}

/// True once the ball has reached the left or right edge of the court.
pub fn crossed_boundary(ball: &Ball, padding: f32, screen_width: f32) -> bool {
    let x = ball.position.x;
    x <= padding || x >= screen_width - padding
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle() -> Rect {
        Rect {
            min: Vec2::new(16.0, 200.0),
            size: Vec2::new(16.0, 128.0),
        }
    }

    #[test]
    fn circle_rect_overlap_cases() {
        let rect = paddle();
        // Face contact.
        assert!(circle_hits_rect(Vec2::new(38.0, 260.0), 8.0, &rect));
        // Inside.
        assert!(circle_hits_rect(Vec2::new(24.0, 210.0), 8.0, &rect));
        // Clear miss to the right.
        assert!(!circle_hits_rect(Vec2::new(41.0, 260.0), 8.0, &rect));
        // Near the corner but outside the radius.
        assert!(!circle_hits_rect(Vec2::new(38.0, 194.0), 8.0, &rect));
        // Touching the corner diagonally.
        assert!(circle_hits_rect(Vec2::new(36.0, 196.0), 8.0, &rect));
    }

    #[test]
    fn centre_hit_returns_flat() {
        let rect = paddle();
        let mut ball = Ball::new(Vec2::new(36.0, 264.0), 8.0, Vec2::new(-650.0, 120.0));

        assert!(bounce_off_paddle(&mut ball, &rect, 650.0));
        assert_eq!(ball.velocity.x, 650.0);
        assert_eq!(ball.velocity.y, 0.0);
    }

    #[test]
    fn edge_hits_deflect_steeply() {
        let rect = paddle();
        assert_eq!(deflect_y(200.0, &rect, 650.0), -650.0);
        assert_eq!(deflect_y(328.0, &rect, 650.0), 650.0);
        assert!(deflect_y(232.0, &rect, 650.0) < 0.0);
    }

    #[test]
    fn miss_leaves_ball_untouched() {
        let rect = paddle();
        let mut ball = Ball::new(Vec2::new(200.0, 264.0), 8.0, Vec2::new(-650.0, 40.0));

        assert!(!bounce_off_paddle(&mut ball, &rect, 650.0));
        assert_eq!(ball.velocity, Vec2::new(-650.0, 40.0));
    }

    #[test]
    fn top_wall_reflects_upward_motion() {
        let mut ball = Ball::new(Vec2::new(600.0, 16.0), 8.0, Vec2::new(300.0, -50.0));
        assert!(bounce_off_walls(&mut ball, 16.0, 720.0));
        assert_eq!(ball.velocity.y, 50.0);
    }

    #[test]
    fn bottom_wall_reflects_downward_motion() {
        let mut ball = Ball::new(Vec2::new(600.0, 710.0), 8.0, Vec2::new(300.0, 80.0));
        assert!(bounce_off_walls(&mut ball, 16.0, 720.0));
        assert_eq!(ball.velocity.y, -80.0);

        // Already heading back into the court.
        assert!(!bounce_off_walls(&mut ball, 16.0, 720.0));
        assert_eq!(ball.velocity.y, -80.0);
    }

    #[test]
    fn boundary_on_either_side() {
        let mut ball = Ball::new(Vec2::new(640.0, 360.0), 8.0, Vec2::ZERO);
        assert!(!crossed_boundary(&ball, 16.0, 1280.0));

        ball.position.x = 1265.0;
        assert!(crossed_boundary(&ball, 16.0, 1280.0));

        ball.position.x = 16.0;
        assert!(crossed_boundary(&ball, 16.0, 1280.0));
    }
}
