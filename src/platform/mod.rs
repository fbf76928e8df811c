//! Platform abstraction layer
//!
//! Browser glue lives in `web` (wasm32 only): canvas lookup, pointer events,
//! animation-frame scheduling and logger setup. Native builds have no window
//! and run headless sessions from the binary instead.

#[cfg(target_arch = "wasm32")]
pub mod web;
