//! The player's paddle

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::pointer::PointerMailbox;
use crate::config::PaddleConfig;

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge (fixed)
    pub y: f32,
    pub width: f32,
    pub height: f32,
    playfield_width: f32,
    #[serde(skip, default = "detached_pointer")]
    pointer: PointerMailbox,
}

fn detached_pointer() -> PointerMailbox {
    PointerMailbox::new(0.0)
}

impl Paddle {
    /// Centered horizontally, resting `bottom_offset` above the playfield bottom
    pub fn new(playfield_width: f32, playfield_height: f32, config: &PaddleConfig) -> Self {
        let x = playfield_width / 2.0 - config.width / 2.0;
        Self {
            x,
            y: playfield_height - config.bottom_offset,
            width: config.width,
            height: config.height,
            playfield_width,
            pointer: PointerMailbox::new(x),
        }
    }

    /// Handle for the input listener
    pub fn pointer(&self) -> PointerMailbox {
        self.pointer.clone()
    }

    /// Store a pointer sample (viewport coordinates)
    pub fn on_pointer_move(&self, client_x: f32) {
        self.pointer.post(client_x);
    }

    /// Bounce the ball if it touches the paddle, then follow the pointer
    ///
    /// Only the ball's center x is tested against the paddle span, so a ball
    /// clipping a corner passes through. Returns true when the ball was hit.
    pub fn update(&mut self, ball: &mut Ball, viewport_left: f32) -> bool {
        let ball_bottom = ball.y() + ball.radius();
        let ball_top = ball.y() - ball.radius();
        let paddle_top = self.y;
        let paddle_bottom = self.y + self.height;
        let paddle_left = self.x;
        let paddle_right = self.x + self.width;

        let hit = ball_bottom > paddle_top
            && ball_top < paddle_bottom
            && ball.x() > paddle_left
            && ball.x() < paddle_right;

        if hit {
            ball.reflect_vertical();
            ball.snap_above(paddle_top);
        }

        self.x = self.pointer.latest() - viewport_left - self.width / 2.0;
        if self.x < 0.0 {
            self.x = 0.0;
        }
        if self.x + self.width > self.playfield_width {
            self.x = self.playfield_width - self.width;
        }

        hit
    }
}
