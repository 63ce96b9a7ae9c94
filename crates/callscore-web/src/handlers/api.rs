//! API proxy handlers forwarding browser calls to the evaluation backend
//!
//! The backend's status code and JSON body pass through untouched; only
//! transport failures are translated (timeout to 504, anything else to
//! 502) so the browser-side services can map statuses uniformly.

use crate::{api_client::BackendResponse, state::AppState};
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use callscore_core::{Error, Result};
use serde_json::json;
use std::sync::Arc;
use tracing::error;

/// Aggregate statistics, polled by the dashboard
pub async fn statistics(State(state): State<Arc<AppState>>) -> Response {
    forward(state.api_client.get_statistics().await, "statistics")
}

/// Ordered list of all evaluation records, polled by the dashboard
pub async fn evaluations(State(state): State<Arc<AppState>>) -> Response {
    forward(state.api_client.get_evaluations().await, "evaluations")
}

/// Single evaluation lookup by record ID
pub async fn evaluation(
    State(state): State<Arc<AppState>>,
    Path(record_id): Path<i64>,
) -> Response {
    forward(state.api_client.get_evaluation(record_id).await, "evaluation")
}

/// Multipart audio upload, re-submitted to the backend's `/transcribe/`
pub async fn transcribe(State(state): State<Arc<AppState>>, mut multipart: Multipart) -> Response {
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some("file") {
                    continue;
                }
                let filename = field
                    .file_name()
                    .map_or_else(|| "audio".to_string(), ToString::to_string);
                let content_type = field
                    .content_type()
                    .map_or_else(|| "application/octet-stream".to_string(), ToString::to_string);

                return match field.bytes().await {
                    Ok(data) => forward(
                        state
                            .api_client
                            .transcribe(filename, &content_type, data.to_vec())
                            .await,
                        "transcription",
                    ),
                    Err(e) => {
                        error!("Failed to read uploaded audio data: {e}");
                        bad_request("Failed to read audio data")
                    }
                };
            }
            Ok(None) => break,
            Err(e) => {
                error!("Failed to parse multipart upload: {e}");
                return bad_request("Failed to parse multipart data");
            }
        }
    }

    bad_request("Request is missing the 'file' field")
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

fn forward(result: Result<BackendResponse>, what: &str) -> Response {
    match result {
        Ok(reply) => (reply.status, Json(reply.body)).into_response(),
        Err(Error::Timeout { duration_ms }) => {
            error!("Backend {what} request timed out after {duration_ms}ms");
            (
                StatusCode::GATEWAY_TIMEOUT,
                Json(json!({"detail": "upstream timeout"})),
            )
                .into_response()
        }
        Err(e) => {
            error!("Backend {what} request failed: {e}");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({"detail": e.to_string()})),
            )
                .into_response()
        }
    }
}

fn bad_request(detail: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({"detail": detail}))).into_response()
}
