//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` types in any signature
//! - Absence (404) is an error variant here; services decide whether it is
//!   a failure or a state

pub mod gateway;

use thiserror::Error;

pub use gateway::{
    ChatTurnReply, ChatTurnRequest, GatewayError, GatewayResult, OAuthInitiation,
    RemoteGatewayPort,
};

/// Core error type for semantic domain errors.
///
/// Adapters should map this to their own error types (CLI exit codes,
/// user-facing messages).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Remote gateway call failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Integration lifecycle action failed.
    #[error(transparent)]
    Lifecycle(#[from] crate::services::LifecycleError),

    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),
}
