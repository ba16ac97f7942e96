//! Errors that end at the flow which raised them

use crate::auth::error_messages::{
    BLANK_CITY, LOGIN_FAILED, MISSING_CREDENTIALS, SEARCH_FAILED, get_user_friendly_error,
};
use parkspot_http::ClientError;
use thiserror::Error;

/// Rejected locally, before any request is made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", BLANK_CITY)]
    BlankCity,

    #[error("{}", MISSING_CREDENTIALS)]
    MissingCredentials,
}

/// The server refused the credentials, or the login could not complete
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AuthError {
    message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ClientError> for AuthError {
    fn from(err: ClientError) -> Self {
        Self::new(get_user_friendly_error(err.server_message(), LOGIN_FAILED))
    }
}

/// A city search failed in transport or on the server
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SearchError {
    message: String,
}

impl SearchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ClientError> for SearchError {
    fn from(err: ClientError) -> Self {
        Self::new(get_user_friendly_error(err.server_message(), SEARCH_FAILED))
    }
}

/// The logout request did not reach the server or was refused.
///
/// Never shown to the user: local state is cleared regardless.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("logout request failed: {reason}")]
pub struct LogoutTransportError {
    reason: String,
}

impl LogoutTransportError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<ClientError> for LogoutTransportError {
    fn from(err: ClientError) -> Self {
        Self::new(err.to_string())
    }
}

/// A path that names no page
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no page at {0}")]
pub struct UnknownRoute(pub String);
