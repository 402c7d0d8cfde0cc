//! Error types for ARI operations

use thiserror::Error;

use crate::transport::Method;

/// Result type for ARI client operations
pub type Result<T> = std::result::Result<T, AriError>;

/// Errors that can occur while talking to the ARI server
///
/// Every variant is a transport-level failure from the caller's point of
/// view. Not-found and conflict conditions are not separate kinds; inspect
/// [`AriError::status`] or use the `is_*` helpers when the distinction
/// matters.
#[derive(Debug, Error)]
pub enum AriError {
    /// Network, TLS or timeout failure in the HTTP client
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("{method} {path} failed with status {status}: {body}")]
    Status {
        method: Method,
        path: String,
        status: u16,
        body: String,
    },

    /// The response body did not match the expected shape
    #[error("Failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The request body could not be serialized
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl AriError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// HTTP status code reported by the server, if the failure carried one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The server reported that the resource does not exist
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// The server rejected the request because the resource already exists
    /// or is in an incompatible state
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }
}

impl From<config::ConfigError> for AriError {
    fn from(e: config::ConfigError) -> Self {
        Self::config(e.to_string())
    }
}

impl From<url::ParseError> for AriError {
    fn from(e: url::ParseError) -> Self {
        Self::config(format!("invalid base URL: {}", e))
    }
}
