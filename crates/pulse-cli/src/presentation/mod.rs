#![doc = include_str!("README.md")]

//! Shared CLI presentation utilities.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no domain transforms
//! - Domain transforms belong in core services

pub mod dashboard;
pub mod integration;
pub mod tables;
pub mod transcript;

// Re-export commonly used items
pub use dashboard::render_dashboard;
pub use integration::{render_mount_report, render_status};
pub use tables::truncate_string;
pub use transcript::format_turn;
