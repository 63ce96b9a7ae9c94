//! Callscore Web Interface
//!
//! Single-page client for the call-quality evaluation service, plus the
//! host process that serves it and proxies its API calls to the backend.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod api_client;
pub mod app;
pub mod components;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod services;
pub mod state;
pub mod store;

// Re-export the main entry points
pub use server::build_app;
pub use state::AppState;

/// Browser entry point, invoked when the WASM bundle loads
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
