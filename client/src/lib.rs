//! # client
//!
//! Leptos + WASM frontend for the Shelter Housing marketing site.
//!
//! This crate contains the single landing page, its section components, the
//! plain UI state machines behind them (showcase carousel, detail modal,
//! contact form, toasts), and the REST helper for the contact endpoint.
//! Listing data and validation rules come from the `listings` crate so the
//! server renders and validates exactly what the browser shows.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
