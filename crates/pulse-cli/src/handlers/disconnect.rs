//! Disconnect command handler.

use anyhow::Result;
use pulse_core::Confirmation;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::render_status;
use crate::utils::input::prompt_confirmation;

/// Execute the disconnect command.
///
/// Asks for confirmation unless `skip_confirmation` is set.
pub async fn execute(ctx: &CliContext, skip_confirmation: bool) -> Result<()> {
    let confirmation = if skip_confirmation
        || prompt_confirmation(
            "Disconnect your Jira integration? Pulse will no longer read your Jira data",
        )? {
        Confirmation::Confirmed
    } else {
        Confirmation::Declined
    };

    let session = ctx.session();
    let state = session
        .lifecycle()
        .disconnect(confirmation)
        .await
        .map_err(CliError::from)?;

    if confirmation == Confirmation::Declined {
        println!("Disconnect cancelled.");
        return Ok(());
    }
    session.dashboard().clear();

    println!("Jira integration disconnected.");
    println!(
        "{}",
        render_status(state, session.lifecycle().status().as_ref())
    );
    Ok(())
}
