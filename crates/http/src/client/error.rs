//! Client error types

use thiserror::Error;

/// Client error types
///
/// Status variants carry the server supplied `msg`, if the response had one.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {}", describe(.message))]
    ServerError {
        status: u16,
        message: Option<String>,
    },

    /// Authentication failed
    #[error("Authentication failed: {}", describe(.0))]
    AuthenticationFailed(Option<String>),

    /// Resource not found
    #[error("Resource not found: {}", describe(.0))]
    NotFound(Option<String>),

    /// Bad request
    #[error("Bad request: {}", describe(.0))]
    BadRequest(Option<String>),

    /// Forbidden
    #[error("Forbidden: {}", describe(.0))]
    Forbidden(Option<String>),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

fn describe(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or("no details")
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: Option<String>) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// The message the server attached to a rejected request
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::ServerError { message, .. }
            | Self::AuthenticationFailed(message)
            | Self::NotFound(message)
            | Self::BadRequest(message)
            | Self::Forbidden(message) => message.as_deref(),
            Self::Request(_) | Self::Serialization(_) | Self::Configuration(_) => None,
        }
    }

    /// Whether the server said the caller holds no valid session
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_) | Self::Forbidden(_))
    }

    /// Whether a manual re-submit may succeed (transport failures and 5xx).
    ///
    /// The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request(_) => true,
            Self::ServerError { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
