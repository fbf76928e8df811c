//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Randomness only through an injected `RandomSource`
//! - Pointer input only through the `PointerMailbox`
//! - One tick per call, no wall-clock time

pub mod ball;
pub mod blocks;
pub mod game;
pub mod paddle;
pub mod pointer;
pub mod rng;

pub use ball::Ball;
pub use blocks::{BlockLayout, Rect};
pub use game::{Game, GamePhase, SessionSummary};
pub use paddle::Paddle;
pub use pointer::PointerMailbox;
pub use rng::{FixedSequence, RandomSource, SeededRandom};
