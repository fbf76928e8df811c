//! The ball: kinematics and playfield boundary rules

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use crate::config::BallConfig;

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pos: Vec2,
    /// Pixels per tick
    vel: Vec2,
    radius: f32,
    /// Set once the lower edge passes the playfield bottom; never cleared
    missed: bool,
    playfield: Vec2,
}

impl Ball {
    /// Spawn near the top with a random x and a random downward diagonal
    pub fn new(playfield: Vec2, config: &BallConfig, rng: &mut impl RandomSource) -> Self {
        let x = rng.range(config.spawn_x_min, config.spawn_x_max);
        let speed_x = rng.range(config.speed_min, config.speed_max);
        let vx = if rng.coin_flip() { speed_x } else { -speed_x };
        let vy = rng.range(config.speed_min, config.speed_max);

        Self::with_state(
            Vec2::new(x, config.spawn_y),
            Vec2::new(vx, vy),
            config.radius,
            playfield,
        )
    }

    /// Build a ball from explicit state
    pub fn with_state(pos: Vec2, vel: Vec2, radius: f32, playfield: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius,
            missed: false,
            playfield,
        }
    }

    /// Advance one tick and apply the wall rules
    ///
    /// Bottom: flag as missed (no clamp). Left/right: reflect vx. Top: reflect
    /// vy. The checks are independent of each other.
    pub fn integrate(&mut self) {
        self.pos += self.vel;

        if self.pos.y + self.radius > self.playfield.y {
            self.missed = true;
        }

        if self.pos.x - self.radius < 0.0 || self.pos.x + self.radius > self.playfield.x {
            self.vel.x = -self.vel.x;
        }

        if self.pos.y - self.radius < 0.0 {
            self.vel.y = -self.vel.y;
        }
    }

    /// Paddle bounce response
    pub fn reflect_vertical(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Rest the ball's lower edge on `edge_y`
    pub fn snap_above(&mut self, edge_y: f32) {
        self.pos.y = edge_y - self.radius;
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    pub fn is_missed(&self) -> bool {
        self.missed
    }
}
