//! # client
//!
//! Leptos + WASM frontend for the social feed.
//!
//! This crate contains the page shell, the per-post display unit, client
//! state models, REST helpers and formatting utilities. The server crate
//! renders it with the `ssr` feature; the browser hydrates it with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
