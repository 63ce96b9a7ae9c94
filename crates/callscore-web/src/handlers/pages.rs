//! Page handlers for serving the application shell

use axum::response::Html;

/// Single-page application shell; the WASM bundle mounts into it
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}
