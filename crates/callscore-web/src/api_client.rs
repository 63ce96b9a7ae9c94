//! HTTP client for communicating with the evaluation backend
//!
//! Calls are fire-and-forget: no retry, no caching. Replies are passed
//! through to the browser with their status code intact so the client-side
//! services can do their own status mapping.

use callscore_core::{Error, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// Status and JSON body of a backend reply
#[derive(Debug, Clone)]
pub struct BackendResponse {
    /// Status code reported by the backend
    pub status: StatusCode,
    /// JSON body, `Null` when the backend sent none
    pub body: Value,
}

/// API client for making HTTP requests to the evaluation backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    poll_timeout: Duration,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// `poll_timeout` applies to the polled endpoints (statistics and
    /// records list); the lookup and upload calls use transport defaults.
    #[must_use]
    pub fn new(base_url: impl Into<String>, poll_timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            poll_timeout,
        }
    }

    /// Get aggregate statistics
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or times out.
    pub async fn get_statistics(&self) -> Result<BackendResponse> {
        let url = format!("{}/statistics/", self.base_url);
        self.get_json(&url, Some(self.poll_timeout)).await
    }

    /// Get the full, ordered list of evaluation records
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or times out.
    pub async fn get_evaluations(&self) -> Result<BackendResponse> {
        let url = format!("{}/evaluations/", self.base_url);
        self.get_json(&url, Some(self.poll_timeout)).await
    }

    /// Get a single evaluation by record ID
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails. A backend 404 is not an
    /// error here; it is forwarded with its status.
    pub async fn get_evaluation(&self, record_id: i64) -> Result<BackendResponse> {
        let url = format!("{}/evaluation/{record_id}", self.base_url);
        self.get_json(&url, None).await
    }

    /// Submit an audio file for transcription
    ///
    /// # Errors
    ///
    /// Returns an error if the multipart body cannot be built or the
    /// request fails.
    pub async fn transcribe(
        &self,
        filename: String,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<BackendResponse> {
        let part = reqwest::multipart::Part::bytes(data)
            .file_name(filename)
            .mime_str(content_type)
            .map_err(|e| Error::Validation {
                field: "file".to_string(),
                message: format!("invalid content type: {e}"),
            })?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let url = format!("{}/transcribe/", self.base_url);
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.transport_error("submit upload", &e))?;

        Self::into_backend_response(response).await
    }

    async fn get_json(&self, url: &str, timeout: Option<Duration>) -> Result<BackendResponse> {
        let mut request = self.client.get(url);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.transport_error("fetch", &e))?;

        Self::into_backend_response(response).await
    }

    async fn into_backend_response(response: reqwest::Response) -> Result<BackendResponse> {
        let status = response.status();
        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        Ok(BackendResponse { status, body })
    }

    fn transport_error(&self, action: &str, err: &reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                duration_ms: u64::try_from(self.poll_timeout.as_millis()).unwrap_or(u64::MAX),
            }
        } else {
            Error::Upstream(format!("Failed to {action}: {err}"))
        }
    }
}
