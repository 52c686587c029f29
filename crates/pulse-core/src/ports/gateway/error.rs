//! Error types for remote gateway operations.

use thiserror::Error;

/// Errors from remote gateway operations.
///
/// These are domain-level errors that services can branch on.
/// Transport-specific errors (HTTP, JSON) are mapped to these by the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The requested resource does not exist (HTTP 404).
    #[error("Not found: {resource}")]
    NotFound {
        /// What was requested
        resource: String,
    },

    /// No authenticated identity was accepted for the call.
    #[error("Authentication required")]
    Unauthenticated,

    /// The backend answered with an error status.
    #[error("Request failed with status {status}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable message from the error body, if any
        message: Option<String>,
    },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The backend answered with something that could not be decoded.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// The adapter is misconfigured (bad base URL, etc.).
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

impl GatewayError {
    /// Whether this error means "the resource is absent".
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Message provided by the backend itself, when the transport surfaced one.
    #[must_use]
    pub fn structured_message(&self) -> Option<&str> {
        match self {
            Self::Api {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            Self::Unauthenticated => Some("Authentication required"),
            _ => None,
        }
    }
}

/// Result type alias for remote gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;
