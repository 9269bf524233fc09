//! # venue-console
//!
//! Leptos + WASM front-end core for the gaming-venue point-of-sale console
//! (stations, customers, expenses, loyalty).
//!
//! This crate contains the route gates that protect staff and customer
//! pages, the provider state they read, and the formatting helpers shared by
//! every page: currency, numeric rounding/truncation and session durations.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod gate;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
