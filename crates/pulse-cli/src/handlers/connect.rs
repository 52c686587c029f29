//! Connect command handler.
//!
//! Starts the OAuth round trip. The browser finishes it; `pulse callback`
//! picks up the redirect.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the connect command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let handoff = ctx
        .session()
        .lifecycle()
        .connect()
        .await
        .map_err(CliError::from)?;

    println!("Open this address in your browser to authorize Pulse:");
    println!();
    println!("  {}", handoff.authorization_url);
    println!();
    println!("When the browser is redirected back, run:");
    println!("  pulse callback \"<redirected address>\"");
    Ok(())
}
