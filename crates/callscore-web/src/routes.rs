//! Route definitions for the web interface

use crate::{
    handlers::{api, pages},
    state::AppState,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use callscore_core::Config;
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Multipart framing overhead allowed on top of the audio payload
const UPLOAD_OVERHEAD_BYTES: usize = 64 * 1024;

/// Build the complete web application router
pub fn build_routes(config: &Config) -> Router<Arc<AppState>> {
    let body_limit = usize::try_from(config.upload.max_file_size)
        .unwrap_or(usize::MAX)
        .saturating_add(UPLOAD_OVERHEAD_BYTES);

    Router::new()
        // Page routes
        .route("/", get(pages::index))
        // API proxy routes
        .route("/api/statistics", get(api::statistics))
        .route("/api/evaluations", get(api::evaluations))
        .route("/api/evaluation/:id", get(api::evaluation))
        .route("/api/transcribe", post(api::transcribe))
        // Health check
        .route("/health", get(api::health_check))
        // Compiled WASM bundle
        .nest_service("/pkg", ServeDir::new(&config.webserver.assets_dir))
        .layer(DefaultBodyLimit::max(body_limit))
}
