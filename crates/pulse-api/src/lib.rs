#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultPulseClient is meant to be used through RemoteGatewayPort, not
// through its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultPulseClient;

// Configuration
pub use config::PulseClientConfig;

// Errors surfaced while building a client
pub use error::ApiError;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio as _;
