//! # client
//!
//! Leptos + WASM frontend for AMC Tracker: login, signup and a placeholder
//! dashboard. Field validation lives in the `forms` crate; this crate binds
//! it to markup, routing and the HTTP API.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) fails harmlessly; the first logger stays.
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating amc-tracker client");
    leptos::mount::hydrate_body(app::App);
}
