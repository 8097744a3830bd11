//! # panel-ui
//!
//! Leptos + WASM frontend for the panel's admin area.
//!
//! This crate contains pages, components, shared state, and the REST client
//! for the admin role screens. It is rendered on the server (`ssr`) and
//! hydrated in the browser (`hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entrypoint: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
