//! # client
//!
//! Leptos + WASM frontend for the friends (reciprocal links) page.
//!
//! This crate contains the page, its components, plain-data state, the REST
//! client for the remote friends API, and browser helpers. The root crate
//! hosts it with server-side rendering; the `hydrate` feature builds the
//! browser bundle.

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
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
