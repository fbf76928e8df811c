//! Paddle Bounce - a minimal canvas arcade game
//!
//! Core modules:
//! - `sim`: Simulation (ball, paddle, blocks, game state machine)
//! - `render`: Drawing contract and per-phase draw routines
//! - `driver`: Frame scheduling (update -> render -> reschedule)
//! - `config`: Tunable gameplay constants
//! - `platform`: Browser bootstrap and input wiring

pub mod config;
pub mod driver;
pub mod platform;
pub mod render;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use driver::{SteppedDriver, TickDriver, frame};
pub use render::{RecordingSurface, Surface};
pub use sim::{Game, GamePhase};

/// Game configuration constants
pub mod consts {
    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPAWN_Y: f32 = 30.0;
    pub const BALL_SPAWN_X_MIN: f32 = 30.0;
    pub const BALL_SPAWN_X_MAX: f32 = 250.0;
    /// Per-axis speed magnitude range (pixels per tick)
    pub const BALL_SPEED_MIN: f32 = 3.0;
    pub const BALL_SPEED_MAX: f32 = 5.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 60.0;
    pub const PADDLE_HEIGHT: f32 = 16.0;
    /// Distance from the playfield bottom to the paddle top
    pub const PADDLE_BOTTOM_OFFSET: f32 = 32.0;

    /// Block defaults
    pub const BLOCK_HEIGHT: f32 = 20.0;

    /// Decorative block grid (1 = block drawn)
    pub const BLOCK_GRID: [[u8; 6]; 6] = [
        [0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0],
        [1, 1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1],
    ];
}
