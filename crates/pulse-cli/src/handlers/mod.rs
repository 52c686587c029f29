#![doc = include_str!("README.md")]

//! Command handlers that delegate to the session services.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call `PulseSession` services
//!   3. Format output for the terminal
//!
//! Handlers should NOT:
//! - Talk to the HTTP client directly
//! - Contain business logic

pub mod ask;
pub mod callback;
pub mod chat;
pub mod connect;
pub mod dashboard;
pub mod disconnect;
pub mod status;
