//! # client
//!
//! Leptos + WASM frontend for the practice website.
//!
//! This crate contains pages, components, shared content state, and REST
//! helpers. The draggable sliders on the home page are thin hosts around the
//! `carousel` crate: `components::carousel` wires DOM events and timers to the
//! engine and renders the track it describes.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"console logger already initialized".into());
    }
    leptos::mount::hydrate_body(app::App);
}
