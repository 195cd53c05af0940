//! # edora-client
//!
//! Leptos + WASM frontend for the Edora channel-sharing platform.
//!
//! The crate is split into a browser-free core and the Leptos views on top
//! of it:
//!
//! - `state` holds the scene state machine, session storage and display state.
//! - `net` wraps every backend endpoint behind a `Transport` seam.
//! - `services` coordinates session bootstrap, summary refresh, search and
//!   post interactions.
//! - `pages` and `components` render one scene at a time.
//!
//! Browser-only code (gloo-net, localStorage, alerts) is gated behind the
//! `csr` feature so the core compiles and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the application.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
