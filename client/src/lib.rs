//! # client
//!
//! Leptos + WASM frontend for the appointment scheduler.
//!
//! This crate contains the route table, the session guard for the
//! dashboard route, page components, application state, and the REST
//! layer talking to the scheduler API.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point invoked by the WASM loader in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
