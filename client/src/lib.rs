//! # client
//!
//! Leptos + WASM frontend for Knowledge Hub, a technical-article publishing
//! site with AI writing aids.
//!
//! This crate contains pages, components, the session store and route guard,
//! and the REST request layer. The article/auth/AI backend is a separate
//! service; the `knowledge-hub` host only serves this app.

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
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
