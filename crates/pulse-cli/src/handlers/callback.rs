//! Callback command handler.
//!
//! Handles the address the browser landed on after authorization: reads the
//! redirect marker, refreshes status and reconciles once after a success.

use anyhow::Result;
use url::Url;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::render_mount_report;

/// Execute the callback command.
pub async fn execute(ctx: &CliContext, address: &str) -> Result<()> {
    let mut address = Url::parse(address.trim())
        .map_err(|e| CliError::Arguments(format!("invalid redirect address: {e}")))?;

    let report = ctx.session().lifecycle().mount(&mut address).await;

    println!("{}", render_mount_report(&report));
    println!("Address: {address}");
    Ok(())
}
