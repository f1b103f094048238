#![recursion_limit = "256"]
//! # client
//!
//! Leptos + WASM frontend for the agency website: the public single-page
//! site rendered from stored content, and the admin console that edits it.
//!
//! Content persistence, schema defaults, and editing rules live in the
//! `content` crate; this crate binds them to the browser (`localStorage`,
//! CSS variables, file download/upload) and to reactive views.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
