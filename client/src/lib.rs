//! # client
//!
//! Leptos + WASM frontend for the recruitment portal.
//!
//! This crate contains pages, components, application state, and the REST
//! helpers that talk to the ATS backend. Session lifecycle, guard decisions,
//! and the profile-completion gate come from `ats-core`; this crate wires them
//! into reactive context and routing.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger init failed: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
