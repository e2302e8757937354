//! Error types for Punchcard
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Punchcard operations
///
/// This enum encompasses all possible errors that can occur during
/// configuration loading, API calls, session persistence, and
/// local state management.
#[derive(Error, Debug)]
pub enum PunchcardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server rejected the request (non-2xx, non-401)
    #[error("API error: status={status}, {message}")]
    Api {
        /// HTTP status code returned by the server
        status: u16,
        /// Response body or additional context
        message: String,
    },

    /// Authentication errors (e.g., 401 Unauthorized)
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// No stored session when one is required
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    /// Session persistence errors (other than keyring failures)
    #[error("Session storage error: {0}")]
    Session(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Keyring/credential storage errors
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),
}

/// Result type alias for Punchcard operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = PunchcardError::Config("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_api_error_display() {
        let error = PunchcardError::Api {
            status: 422,
            message: "name must not be empty".to_string(),
        };
        let s = error.to_string();
        assert!(s.contains("status=422"));
        assert!(s.contains("name must not be empty"));
    }

    #[test]
    fn test_authentication_error_display() {
        let error = PunchcardError::Authentication("token rejected".to_string());
        assert_eq!(error.to_string(), "Authentication error: token rejected");
    }

    #[test]
    fn test_missing_credentials_error_display() {
        let error = PunchcardError::MissingCredentials("no session token".to_string());
        assert_eq!(error.to_string(), "Missing credentials: no session token");
    }

    #[test]
    fn test_session_error_display() {
        let error = PunchcardError::Session("corrupt entry".to_string());
        assert_eq!(error.to_string(), "Session storage error: corrupt entry");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: PunchcardError = io_error.into();
        assert!(matches!(error, PunchcardError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_str = "{invalid json}";
        let json_error = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let error: PunchcardError = json_error.into();
        assert!(matches!(error, PunchcardError::Serialization(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_str = "invalid: : yaml";
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let error: PunchcardError = yaml_error.into();
        assert!(matches!(error, PunchcardError::Yaml(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PunchcardError>();
    }
}
