//! # gatehouse-client
//!
//! Leptos + WASM frontend for the Gatehouse authentication service.
//! Renders the login/register page, validates credential shape in the
//! browser, drives the signup and login endpoints, and lands the user on
//! the dashboard once the service accepts the credentials.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entrypoint: install the panic hook and console logging, then
/// hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
