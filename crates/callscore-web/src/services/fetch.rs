//! HTTP plumbing shared by the polling store

use futures_util::future::{Either, select};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use std::pin::pin;

/// Timeout applied to the polled endpoints
pub const FETCH_TIMEOUT_MS: u32 = 10_000;

/// Why a fetch did not produce data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// No reply within [`FETCH_TIMEOUT_MS`]
    Timeout,
    /// The request never reached the server
    Network(String),
    /// The server replied with a non-success status
    Status(u16),
    /// The reply body did not match the expected shape
    Decode(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout => write!(f, "request timed out after {FETCH_TIMEOUT_MS}ms"),
            Self::Network(msg) => write!(f, "network failure: {msg}"),
            Self::Status(status) => write!(f, "unexpected status {status}"),
            Self::Decode(msg) => write!(f, "invalid response body: {msg}"),
        }
    }
}

/// GET `path` and decode the JSON reply, racing against the poll timeout.
///
/// # Errors
///
/// Returns a [`FetchError`] when the request fails, times out, comes back
/// with a non-success status, or the body cannot be decoded.
pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    let request = async move {
        let response = Request::get(path)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    };

    let request = pin!(request);
    let timeout = pin!(TimeoutFuture::new(FETCH_TIMEOUT_MS));
    match select(request, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(FetchError::Timeout),
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(
            FetchError::Timeout.to_string(),
            "request timed out after 10000ms"
        );
        assert_eq!(
            FetchError::Status(502).to_string(),
            "unexpected status 502"
        );
        assert_eq!(
            FetchError::Network("lost".to_string()).to_string(),
            "network failure: lost"
        );
    }
}
