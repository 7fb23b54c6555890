//! # paybord
//!
//! Merchant payments dashboard: a Leptos SSR + hydrate client and, behind
//! the `ssr` feature, an axum server that renders it and mounts an in-memory
//! demo API under `/api`.
//!
//! Shared contracts (`wizard`, `list_view`, `state::refresh`) are plain Rust
//! and tested without a browser; everything that touches `window` is gated
//! on the `hydrate` feature.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
#[cfg(any(test, feature = "ssr"))]
pub mod demo;
pub mod error;
pub mod list_view;
pub mod net;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod server;
pub mod state;
pub mod util;
pub mod wizard;

/// WASM entry point: attach to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
