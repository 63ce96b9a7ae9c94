//! Configuration management for the callscore web client
//!
//! The backend base URL and all tunables are resolved here exactly once,
//! at process start, instead of living in compile-time constants.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Web server configuration (the process serving the client)
    #[serde(default)]
    pub webserver: WebServerConfig,

    /// Evaluation backend configuration
    #[serde(default)]
    pub backend: BackendConfig,

    /// Upload constraints
    #[serde(default)]
    pub upload: UploadConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Web server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the compiled WASM bundle served under /pkg
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
}

/// Evaluation backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the evaluation backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout in seconds for the polled endpoints (statistics, records)
    #[serde(default = "default_poll_timeout")]
    pub poll_timeout_secs: u64,
}

/// Upload constraints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Maximum accepted audio file size in bytes
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,

    /// Accepted audio MIME types
    #[serde(default = "default_allowed_types")]
    pub allowed_types: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("pkg")
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

const fn default_poll_timeout() -> u64 {
    10
}

const fn default_max_file_size() -> u64 {
    crate::utils::MAX_UPLOAD_BYTES
}

fn default_allowed_types() -> Vec<String> {
    crate::utils::ALLOWED_AUDIO_TYPES
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for WebServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            assets_dir: default_assets_dir(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            poll_timeout_secs: default_poll_timeout(),
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size: default_max_file_size(),
            allowed_types: default_allowed_types(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from environment and files
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("CALLSCORE").separator("_"))
            .build()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })?;

        config
            .try_deserialize()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.webserver.host, "127.0.0.1");
        assert_eq!(config.webserver.port, 3000);
        assert_eq!(config.webserver.assets_dir, PathBuf::from("pkg"));

        assert_eq!(config.backend.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.backend.poll_timeout_secs, 10);

        assert_eq!(config.upload.max_file_size, 50 * 1024 * 1024);
        assert_eq!(
            config.upload.allowed_types,
            vec!["audio/mp3", "audio/wav", "audio/m4a", "audio/ogg"]
        );

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_config_serialization_round_trip() {
        let config = Config::default();

        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.webserver.host, config.webserver.host);
        assert_eq!(deserialized.webserver.port, config.webserver.port);
        assert_eq!(deserialized.backend.base_url, config.backend.base_url);
        assert_eq!(deserialized.upload.max_file_size, config.upload.max_file_size);
        assert_eq!(deserialized.logging.level, config.logging.level);
    }

    #[test]
    fn test_partial_config_deserialization() {
        let json_str = r#"{
            "webserver": {"host": "0.0.0.0"},
            "backend": {"base_url": "http://backend:8000"}
        }"#;

        let config: Config = serde_json::from_str(json_str).unwrap();

        assert_eq!(config.webserver.host, "0.0.0.0");
        assert_eq!(config.webserver.port, 3000); // Uses default
        assert_eq!(config.backend.base_url, "http://backend:8000");
        assert_eq!(config.backend.poll_timeout_secs, 10); // Uses default
        assert_eq!(config.upload.max_file_size, 50 * 1024 * 1024);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_bounds() {
        let config = Config::default();

        assert!(config.webserver.port > 0);
        assert!(config.backend.poll_timeout_secs > 0);
        assert!(config.upload.max_file_size > 0);
        assert!(!config.upload.allowed_types.is_empty());
        assert!(!config.logging.level.is_empty());
    }
}
