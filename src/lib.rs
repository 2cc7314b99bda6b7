//! # submissions-admin
//!
//! Leptos + WASM single-page administration console for a form-submissions
//! backend. A session gate validates a stored Basic token against the API,
//! and a route-driven controller keeps the displayed submission list in sync
//! with the active selector — the list is always a full server snapshot,
//! refetched after every state-changing action.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
