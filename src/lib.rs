//! # geoboard-client
//!
//! Leptos + WASM client for a location-tagged message board. A Leaflet map
//! drives four viewport fields; the client polls the server for the messages
//! inside that viewport and posts new ones via a form, never navigating away.
//!
//! This crate contains the root component, view components, the Leaflet map
//! controller, network helpers, and the client-side state. Browser-only code
//! is gated behind the `csr` feature so the state and its tests build
//! natively.

pub mod app;
pub mod components;
pub mod map;
pub mod net;
pub mod state;

/// WASM entry point: install the panic hook, wire `log` to the console, and
/// mount the application.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(crate::app::App);
}
