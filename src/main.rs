//! Paddle Bounce entry point
//!
//! On the web the game runs in the page's canvas. Natively there is no
//! window, so a seeded headless session is played against a recording
//! surface and its outcome logged.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    paddle_bounce::platform::web::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use paddle_bounce::{Game, GameConfig, RecordingSurface, SteppedDriver};

    /// Hard stop for the headless run
    const MAX_FRAMES: u64 = 100_000;
    /// Points the headless player collects before letting the ball drop
    const TARGET_SCORE: u32 = 10;

    env_logger::init();
    log::info!("Paddle Bounce (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(12345);

    let playfield = Vec2::new(300.0, 400.0);
    let mut game = Game::from_seed(playfield, &GameConfig::default(), seed);
    let mut surface = RecordingSurface::new(playfield.x, playfield.y);
    let mut driver = SteppedDriver::new();

    // Headless "player": keep the paddle centered under the ball until the
    // target is reached, then park it in the far corner
    let pointer = game.pointer();
    let mut frames = 0;
    while frames < MAX_FRAMES {
        if game.score() < TARGET_SCORE {
            pointer.post(game.ball().x());
        } else if game.ball().x() < playfield.x / 2.0 {
            pointer.post(playfield.x);
        } else {
            pointer.post(0.0);
        }
        if !driver.step(&mut game, &mut surface) {
            break;
        }
        frames += 1;
        surface.take_commands();
    }

    let summary = game.summary();
    println!(
        "Seed {}: score {} after {} ticks ({:?})",
        seed, summary.score, summary.ticks, summary.phase
    );
}
