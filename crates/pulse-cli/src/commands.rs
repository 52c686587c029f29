//! Subcommands.

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Chat with Ask Pulse interactively
    Chat {
        /// Start the conversation with the Ask Pulse greeting
        #[arg(long)]
        greet: bool,
    },

    /// Ask Ask Pulse a single question
    Ask {
        /// The question; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// Show the Jira integration status
    Status,

    /// Start connecting Jira (prints the authorization URL)
    Connect,

    /// Finish connecting after the OAuth redirect
    Callback {
        /// Address the browser was redirected to
        /// (e.g. "http://localhost:3000/integrations?jira_connected=success")
        url: String,
    },

    /// Disconnect the Jira integration
    Disconnect {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the Jira dashboard
    Dashboard,
}
