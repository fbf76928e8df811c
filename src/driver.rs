//! Frame scheduling
//!
//! A frame is update -> render -> reschedule. The game loop is
//! self-terminating: once the session is over the frame asks its driver to
//! stop instead of scheduling another tick.

use crate::render::{Surface, render};
use crate::sim::Game;

/// Host frame scheduler
pub trait TickDriver {
    /// Request one more frame
    fn schedule_next(&mut self);
    /// No further frames will be requested
    fn stop(&mut self);
}

/// Run one frame of the game loop
pub fn frame<S, D>(game: &mut Game, surface: &mut S, driver: &mut D)
where
    S: Surface + ?Sized,
    D: TickDriver + ?Sized,
{
    if game.is_over() {
        driver.stop();
        return;
    }

    game.update(surface.viewport_left());
    render(game, surface);

    if game.is_over() {
        match serde_json::to_string(&game.summary()) {
            Ok(json) => log::info!("Session summary: {}", json),
            Err(e) => log::warn!("Failed to encode session summary: {}", e),
        }
        driver.stop();
    } else {
        driver.schedule_next();
    }
}

/// Deterministic driver: frames run only when stepped
#[derive(Debug, Clone)]
pub struct SteppedDriver {
    pending: bool,
    stopped: bool,
    frames: u64,
}

impl Default for SteppedDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SteppedDriver {
    /// The first frame starts scheduled
    pub fn new() -> Self {
        Self {
            pending: true,
            stopped: false,
            frames: 0,
        }
    }

    /// Run the scheduled frame, if any. Returns false when nothing was scheduled.
    pub fn step<S: Surface + ?Sized>(&mut self, game: &mut Game, surface: &mut S) -> bool {
        if !self.pending {
            return false;
        }
        self.pending = false;
        self.frames += 1;
        frame(game, surface, self);
        true
    }

    /// Step until the loop stops itself or `max_frames` have run
    pub fn run<S: Surface + ?Sized>(
        &mut self,
        game: &mut Game,
        surface: &mut S,
        max_frames: u64,
    ) -> u64 {
        let mut ran = 0;
        while ran < max_frames && self.step(game, surface) {
            ran += 1;
        }
        ran
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Frames executed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl TickDriver for SteppedDriver {
    fn schedule_next(&mut self) {
        if !self.stopped {
            self.pending = true;
        }
    }

    fn stop(&mut self) {
        self.pending = false;
        self.stopped = true;
    }
}
