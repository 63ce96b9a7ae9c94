//! Application state management

use crate::api_client::ApiClient;
use callscore_core::Config;

/// Application state holding configuration and the backend client
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// HTTP client for the evaluation backend
    pub api_client: ApiClient,
}

impl AppState {
    /// Create new application state. The backend base URL is taken from
    /// the configuration resolved at process start.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let api_client = ApiClient::new(
            config.backend.base_url.clone(),
            std::time::Duration::from_secs(config.backend.poll_timeout_secs),
        );

        Self { config, api_client }
    }
}
