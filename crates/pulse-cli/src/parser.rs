//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for Pulse.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "pulse")]
#[command(about = "Ask Pulse and your Jira dashboard from the terminal")]
#[command(version)]
pub struct Cli {
    /// Base URL of the Pulse backend
    #[arg(long = "api-url", env = "PULSE_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Bearer token of the signed-in user
    #[arg(long, env = "PULSE_API_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long = "timeout-secs", default_value_t = 30, global = true)]
    pub timeout_secs: u64,

    /// Only send the last N turns as chat history
    #[arg(long = "history-window", env = "PULSE_HISTORY_WINDOW", global = true)]
    pub history_window: Option<usize>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
