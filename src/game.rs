use rand::Rng;
use tracing::{debug, info, trace};

use crate::{
    ball::{random_direction, Ball},
    collision::{bounce_off_paddle, bounce_off_walls, crossed_boundary, Collisions},
    config::{Bounds, Config},
    player::{Direction, Player, Side},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// The ball left the court. Nothing moves any more.
    Over,
}

/// Everything that changes while a round is played.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    config: Config,
    bounds: Bounds,
    players: [Player; 2],
    ball: Ball,
    active: Side,
    ball_speed: f32,
    phase: Phase,
    frame: u64,
}

impl Game {
    /// Fresh round with a random serve.
    pub fn new<R: Rng + ?Sized>(config: Config, rng: &mut R) -> Self {
        let bounds = config.bounds();
        let direction = random_direction(rng, bounds.max_angle);
        let velocity = direction * config.ball_speed_initial;
        let ball = Ball::new(config.ball_start(), config.ball_radius, velocity);

        let game = Self::with_ball(config, ball);
        info!(
            vx = game.ball.velocity.x,
            vy = game.ball.velocity.y,
            active = ?game.active,
            "serve"
        );
        game
    }

    /// Round with a known ball. The receiving side starts active.
    pub fn with_ball(config: Config, ball: Ball) -> Self {
        let bounds = config.bounds();
        let players = [
            Player::new(config.paddle_start(true)),
            Player::new(config.paddle_start(false)),
        ];

        Self {
            active: Side::receiving(ball.velocity.x),
            ball_speed: config.ball_speed_initial,
            config,
            bounds,
            players,
            ball,
            phase: Phase::Playing,
            frame: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    #[cfg(test)]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn active(&self) -> Side {
        self.active
    }

    #[cfg(test)]
    pub fn ball_speed(&self) -> f32 {
        self.ball_speed
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.players[0].score, self.players[1].score)
    }

    /// Advance the round by one fixed timestep.
    ///
    /// `held` is the direction currently requested by whoever holds the
    /// active paddle. Does nothing once the round is over.
    pub fn step(&mut self, held: Option<Direction>) -> Collisions {
        let mut collisions = Collisions::default();
        if self.is_over() {
            return collisions;
        }

        let dt = self.config.fixed_dt;
        for side in [Side::Left, Side::Right] {
            self.players[side.index()].update(
                dt,
                &self.bounds,
                &self.config.paddle,
                held,
                side == self.active,
            );
        }

        self.ball.advance(dt);

        let paddle = self.players[self.active.index()].rect(self.config.paddle_size);
        if bounce_off_paddle(&mut self.ball, &paddle, self.ball_speed) {
            let hitter = &mut self.players[self.active.index()];
            hitter.score += 1;
            self.ball_speed += self.config.ball_speed_increment;
            debug!(
                side = ?self.active,
                score = hitter.score,
                ball_speed = self.ball_speed,
                "paddle hit"
            );
            self.active = self.active.other();
            collisions.paddle_hit = true;
        }

        if bounce_off_walls(&mut self.ball, self.config.padding, self.config.screen.y) {
            trace!(y = self.ball.position.y, "wall bounce");
            collisions.wall_bounce = true;
        }

        if crossed_boundary(&self.ball, self.config.padding, self.config.screen.x) {
            let (left, right) = self.scores();
            info!(left, right, frame = self.frame, "ball out, game over");
            self.phase = Phase::Over;
            collisions.boundary_exit = true;
        }

        self.frame += 1;
        collisions
    }
}
