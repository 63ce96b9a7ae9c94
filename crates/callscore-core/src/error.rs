//! Error types for the callscore web client

use std::{error::Error as StdError, fmt};

/// Main error type for the callscore web client
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(std::io::Error),

    /// Configuration error
    Configuration {
        /// Error message
        message: String,
    },

    /// Validation error
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Audio format error
    UnsupportedAudioFormat {
        /// The unsupported MIME type
        format: String,
    },

    /// File size error
    FileSizeExceeded {
        /// Actual file size
        size: u64,
        /// Maximum allowed size
        max_size: u64,
    },

    /// Timeout error
    Timeout {
        /// Timeout duration in milliseconds
        duration_ms: u64,
    },

    /// Not found error
    NotFound {
        /// Resource that was not found
        resource: String,
    },

    /// Serialization error
    Serialization(serde_json::Error),

    /// Evaluation backend is unreachable or misbehaving
    Upstream(String),

    /// Other error
    Other(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Configuration { message } => write!(f, "Configuration error: {message}"),
            Self::Validation { field, message } => {
                write!(f, "Validation error: {field} - {message}")
            }
            Self::UnsupportedAudioFormat { format } => {
                write!(f, "Audio format not supported: {format}")
            }
            Self::FileSizeExceeded { size, max_size } => {
                write!(f, "File size {size} exceeds maximum of {max_size}")
            }
            Self::Timeout { duration_ms } => {
                write!(f, "Operation timed out after {duration_ms}ms")
            }
            Self::NotFound { resource } => write!(f, "Resource not found: {resource}"),
            Self::Serialization(err) => write!(f, "Serialization error: {err}"),
            Self::Upstream(msg) => write!(f, "Backend error: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

// From implementations for automatic conversions
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io;

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let app_error = Error::from(io_error);

        match app_error {
            Error::Io(_) => {}
            _ => panic!("Expected Io error variant"),
        }

        assert!(format!("{app_error}").contains("I/O error"));
    }

    #[test]
    fn test_configuration_error() {
        let error = Error::Configuration {
            message: "Invalid backend URL".to_string(),
        };

        assert_eq!(
            format!("{error}"),
            "Configuration error: Invalid backend URL"
        );
    }

    #[test]
    fn test_validation_error() {
        let error = Error::Validation {
            field: "record_id".to_string(),
            message: "Field is required".to_string(),
        };

        assert_eq!(
            format!("{error}"),
            "Validation error: record_id - Field is required"
        );
    }

    #[test]
    fn test_unsupported_audio_format_error() {
        let error = Error::UnsupportedAudioFormat {
            format: "audio/aac".to_string(),
        };

        assert_eq!(format!("{error}"), "Audio format not supported: audio/aac");
    }

    #[test]
    fn test_file_size_exceeded_error() {
        let error = Error::FileSizeExceeded {
            size: 60 * 1024 * 1024,
            max_size: 50 * 1024 * 1024,
        };

        let error_msg = format!("{error}");
        assert!(error_msg.contains("62914560"));
        assert!(error_msg.contains("52428800"));
    }

    #[test]
    fn test_timeout_error() {
        let error = Error::Timeout { duration_ms: 10000 };

        assert_eq!(format!("{error}"), "Operation timed out after 10000ms");
    }

    #[test]
    fn test_not_found_error() {
        let error = Error::NotFound {
            resource: "record 7".to_string(),
        };

        assert_eq!(format!("{error}"), "Resource not found: record 7");
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
        let app_error = Error::from(json_error);

        match app_error {
            Error::Serialization(_) => {}
            _ => panic!("Expected Serialization error variant"),
        }

        assert!(app_error.source().is_some());
    }

    #[test]
    fn test_upstream_error() {
        let error = Error::Upstream("connection refused".to_string());
        assert_eq!(format!("{error}"), "Backend error: connection refused");
    }

    #[test]
    fn test_other_error() {
        let error = Error::Other("Unexpected error occurred".to_string());
        assert_eq!(format!("{error}"), "Unexpected error occurred");
    }

    #[test]
    fn test_error_source_for_plain_variants() {
        let error = Error::Configuration {
            message: "test".to_string(),
        };
        assert!(error.source().is_none());

        let error = Error::Upstream("test".to_string());
        assert!(error.source().is_none());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Ok("success".to_string())
        }

        fn returns_error() -> Result<String> {
            Err(Error::Other("test error".to_string()))
        }

        assert!(returns_result().is_ok());
        assert!(returns_error().is_err());
    }
}
