//! # lectern-ui
//!
//! Leptos + WASM frontend for the Lectern educational content platform.
//! Teachers request AI-generated lecture notes, assignments, and flashcards;
//! students browse them. All heavy lifting (document processing, retrieval,
//! generation) lives in the HTTP backend — this crate is the presentation
//! layer plus the session/authorization boundary in front of it.
//!
//! This crate contains pages, components, application state, the network
//! layer for the auth endpoints, and the session store wrapper around
//! browser `localStorage`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point — hydrates the application in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
