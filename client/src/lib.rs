//! # client
//!
//! Leptos + WASM front end for the Conectar user-management application.
//!
//! This crate contains pages, components, the auth state machine, the REST
//! client for the remote user API, and the browser session store. It owns no
//! business rules: persistence and authorization live behind the API.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
