//! Internal error types for Pulse API operations.
//!
//! Client construction errors are public; everything else is mapped to
//! `GatewayError` at the port boundary.

use thiserror::Error;

/// Result type alias for Pulse API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors related to Pulse API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("Pulse API request failed with status {status}: {url}")]
    Status {
        status: u16,
        url: String,
        /// Message extracted from an `{"error": ...}` or `{"message": ...}` body
        message: Option<String>,
    },

    /// The backend returned a body that does not match the expected shape.
    #[error("Invalid response from Pulse API: {message}")]
    InvalidResponse { message: String },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {message}")]
    ClientBuild { message: String },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
