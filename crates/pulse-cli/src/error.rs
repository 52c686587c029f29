//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `CoreError` to exit codes and user-facing messages.

use pulse_api::ApiError;
use pulse_core::{CoreError, GatewayError, LifecycleError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (terminal, stdin).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The backend rejected our credentials.
    #[error("Not signed in: {0}")]
    Auth(String),

    /// The backend could not be reached.
    #[error("Pulse backend unavailable: {0}")]
    Unavailable(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(_) => 1,
            CliError::Arguments(_) => 2,   // EX_USAGE
            CliError::Io(_) => 74,         // EX_IOERR
            CliError::Config(_) => 78,     // EX_CONFIG
            CliError::Auth(_) => 77,       // EX_NOPERM
            CliError::Unavailable(_) => 69, // EX_UNAVAILABLE
        }
    }
}

impl From<GatewayError> for CliError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Unauthenticated => {
                CliError::Auth("set PULSE_API_TOKEN or pass --token".to_string())
            }
            GatewayError::Network { message } => CliError::Unavailable(message),
            GatewayError::Configuration { message } => CliError::Config(message),
            other => CliError::Core(other.to_string()),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Gateway(gateway_err) => gateway_err.into(),
            // Only the fixed user-facing message is shown; the cause is logged.
            CoreError::Lifecycle(lifecycle_err) => CliError::Core(lifecycle_err.to_string()),
            CoreError::Settings(settings_err) => CliError::Config(settings_err.to_string()),
            CoreError::Validation(msg) => CliError::Arguments(msg),
        }
    }
}

impl From<LifecycleError> for CliError {
    fn from(err: LifecycleError) -> Self {
        CoreError::from(err).into()
    }
}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        CliError::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err.to_string())
    }
}
