//! # client
//!
//! Leptos + WASM frontend for the daily tech newsletter archive.
//!
//! This crate contains pages, components, application state, localized copy,
//! and the REST client for the newsletter backend. Display preferences
//! (font size, color mode) live in `state::preferences` and are mirrored onto
//! `<html>` attributes for the stylesheet.

pub mod app;
pub mod components;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating client");
    leptos::mount::hydrate_body(app::App);
}
