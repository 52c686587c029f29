//! Status command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::render_status;

/// Execute the status command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let lifecycle = ctx.session().lifecycle();
    let state = lifecycle.refresh_status().await;
    println!("{}", render_status(state, lifecycle.status().as_ref()));
    println!("Backend: {}", ctx.api_base_url);
    Ok(())
}
