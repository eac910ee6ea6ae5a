//! # subscription-client
//!
//! Leptos + WASM frontend for the subscription platform.
//!
//! This crate contains pages, the route guard, client-side state stores and
//! the per-service HTTP layer that talks to the user, subscription and
//! recommendation services. Browser bindings are gated behind the `csr`
//! feature; without it every store and guard runs natively for tests.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: installs console logging and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
