//! Dashboard command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::render_dashboard;

/// Execute the dashboard command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let session = ctx.session();
    let state = session.dashboard().load(session.lifecycle()).await;
    println!("{}", render_dashboard(&state));
    Ok(())
}
