//! Browser bootstrap
//!
//! Finds the canvas, wires the pointer listener and drives frames from
//! `requestAnimationFrame`. A page without a usable 2-D canvas is left alone.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement, MouseEvent};

use crate::config::GameConfig;
use crate::driver::{TickDriver, frame};
use crate::render::{CanvasSurface, Surface};
use crate::sim::{Game, PointerMailbox};

/// Attribute on the canvas holding an optional JSON `GameConfig` override
const CONFIG_ATTRIBUTE: &str = "data-config";

/// Re-arms `requestAnimationFrame` only when the frame asked for it
#[derive(Debug, Default)]
struct AnimationFrameDriver {
    requested: bool,
}

impl TickDriver for AnimationFrameDriver {
    fn schedule_next(&mut self) {
        self.requested = true;
    }

    fn stop(&mut self) {
        self.requested = false;
    }
}

struct App {
    game: Game,
    surface: CanvasSurface,
    driver: AnimationFrameDriver,
}

/// Start the game on the page's first canvas
pub fn run() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

    let Some(app) = bootstrap() else {
        log::debug!("No 2-D canvas found, not starting");
        return;
    };

    request_animation_frame(Rc::new(RefCell::new(app)));
}

fn bootstrap() -> Option<App> {
    let document = web_sys::window()?.document()?;
    let canvas: HtmlCanvasElement = document
        .query_selector("canvas")
        .ok()
        .flatten()?
        .dyn_into()
        .ok()?;

    let config = load_config(&canvas);
    let surface = CanvasSurface::new(canvas)?;

    let seed = js_sys::Date::now() as u64;
    let playfield = Vec2::new(surface.width(), surface.height());
    let game = Game::from_seed(playfield, &config, seed);
    log::info!(
        "Game started on {}x{} canvas with seed {}",
        playfield.x,
        playfield.y,
        seed
    );

    setup_pointer_listener(&document, game.pointer());

    Some(App {
        game,
        surface,
        driver: AnimationFrameDriver::default(),
    })
}

fn load_config(canvas: &HtmlCanvasElement) -> GameConfig {
    let Some(json) = canvas.get_attribute(CONFIG_ATTRIBUTE) else {
        return GameConfig::default();
    };
    match GameConfig::from_json(&json) {
        Ok(config) => {
            log::info!("Loaded config from {}", CONFIG_ATTRIBUTE);
            config
        }
        Err(e) => {
            log::warn!("Ignoring {}: {}", CONFIG_ATTRIBUTE, e);
            GameConfig::default()
        }
    }
}

fn setup_pointer_listener(document: &Document, pointer: PointerMailbox) {
    let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
        pointer.post(event.client_x() as f32);
    });
    let _ = document
        .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn request_animation_frame(app: Rc<RefCell<App>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        game_loop(app);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn game_loop(app: Rc<RefCell<App>>) {
    let requested = {
        let mut app = app.borrow_mut();
        let App {
            game,
            surface,
            driver,
        } = &mut *app;
        driver.requested = false;
        frame(game, surface, driver);
        driver.requested
    };

    if requested {
        request_animation_frame(app);
    }
}
