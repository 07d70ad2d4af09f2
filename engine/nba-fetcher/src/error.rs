//! Error types for the NBA fetchers

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for fetcher operations
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors that can occur while talking to a provider
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never completed: DNS failure, refused connection, timeout
    #[error("Transport error calling {endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-success status
    #[error("Provider returned status {status} for {endpoint}")]
    Http { endpoint: String, status: StatusCode },

    /// The provider answered but reported errors in the payload (bad key, quota)
    #[error("Provider reported errors for {endpoint}: {message}")]
    Provider { endpoint: String, message: String },

    /// The payload did not have the expected shape
    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FetchError {
    pub(crate) fn transport(endpoint: &str, source: reqwest::Error) -> Self {
        FetchError::Transport {
            endpoint: endpoint.to_string(),
            source,
        }
    }

    /// True for failures that came from the network layer rather than the payload
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport { .. })
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Schema(format!("malformed JSON payload: {err}"))
    }
}

impl From<config::ConfigError> for FetchError {
    fn from(err: config::ConfigError) -> Self {
        FetchError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_errors_become_schema_errors() {
        let err: FetchError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, FetchError::Schema(_)));
        assert!(err.to_string().starts_with("Schema error: malformed JSON payload"));
    }

    #[test]
    fn test_http_error_display() {
        let err = FetchError::Http {
            endpoint: "commonallplayers".to_string(),
            status: StatusCode::FORBIDDEN,
        };
        assert_eq!(err.to_string(), "Provider returned status 403 Forbidden for commonallplayers");
        assert!(!err.is_transport());
    }
}
