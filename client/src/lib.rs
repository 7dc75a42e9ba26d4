//! # client
//!
//! Leptos + WASM frontend for Folio: username/password login and signup, a
//! session cached in `localStorage`, and a gated dashboard.
//!
//! This crate contains pages, components, application state, the REST client
//! and the route gate. The `folio` binary renders it server-side (`ssr`);
//! the browser bundle hydrates it (`hydrate`).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("console logger not installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
