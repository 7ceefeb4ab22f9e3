//! # client
//!
//! Leptos + WASM frontend for the Bereans compliance dashboard.
//!
//! This crate contains the route tree, pages, dashboard chrome, client state
//! and the HTTP client for the host's session API. It is compiled twice: with
//! `ssr` into the host binary for server rendering, and with `hydrate` into
//! the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the app to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
