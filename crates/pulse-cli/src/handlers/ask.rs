//! Ask command handler: one question, one answer.

use anyhow::Result;
use pulse_core::{IgnoreReason, SubmitOutcome};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the ask command.
///
/// The answer goes to stdout. A failed turn is reported as an error so the
/// exit status reflects it.
pub async fn execute(ctx: &CliContext, message: &[String]) -> Result<()> {
    let text = message.join(" ");

    match ctx.session().chat().submit(&text).await {
        SubmitOutcome::Replied(turn) => {
            println!("{}", turn.content);
            if let Some(badge) = turn.function_call_label() {
                eprintln!("({badge})");
            }
            Ok(())
        }
        SubmitOutcome::Errored(turn) => Err(CliError::Core(turn.content).into()),
        SubmitOutcome::Ignored(IgnoreReason::Blank) => {
            Err(CliError::Arguments("message cannot be empty".to_string()).into())
        }
        SubmitOutcome::Ignored(IgnoreReason::Busy) => {
            Err(CliError::Core("another question is still in flight".to_string()).into())
        }
    }
}
