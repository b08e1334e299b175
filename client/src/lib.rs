//! # client
//!
//! Leptos + WASM frontend for the infinite-canvas file board.
//!
//! This crate contains the page shell, DOM components, application state,
//! and the backend adapters (object storage + metadata collections over
//! REST). All board interaction logic lives in the `canvas` crate; this
//! crate maps browser events into `canvas::engine::EngineCore` calls and
//! performs the persistence [`canvas::engine::Action`]s the engine returns.
//!
//! Browser-only code (network, DOM globals, timers) is gated behind the
//! `hydrate` feature so `cargo test` runs natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
