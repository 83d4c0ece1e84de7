//! # client
//!
//! Leptos + WASM frontend for SmartPlate, a food-donation coordination app
//! connecting NGOs, donors, volunteers, and admins.
//!
//! This crate contains pages, components, application state, the REST API
//! client, and the route guards. The `smartplate` host crate server-renders
//! [`app::App`]; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
