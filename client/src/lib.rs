//! # client
//!
//! Leptos frontend for the stuff tracker. Rendered on the server (`ssr`
//! feature, mounted by the `server` crate) and hydrated in the browser
//! (`hydrate` feature, built to WASM).
//!
//! This crate contains the app shell and router, pages, components, client
//! auth state, and REST helpers for the server's JSON API.

// Leptos #[component] macro generates functions returning impl IntoView
#![allow(clippy::must_use_candidate)]

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
