//! Chat command handler.
//!
//! Runs an interactive Ask Pulse conversation on a line editor.

use anyhow::Result;
use pulse_core::{ChatOrchestrator, IgnoreReason, SubmitOutcome};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::presentation::format_turn;

const PROMPT: &str = ">> ";

/// Input lines that end the conversation.
const QUIT_COMMANDS: &[&str] = &["/quit", "/exit"];

/// Execute the chat command.
///
/// Reads lines until `/quit`, Ctrl-C or Ctrl-D. Backend failures are shown
/// as assistant turns and do not end the conversation.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let chat = ctx.session().chat();
    let mut editor = DefaultEditor::new()?;

    for turn in chat.transcript().turns() {
        println!("{}\n", format_turn(turn));
    }
    println!("Type /quit to leave.");

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };

        if QUIT_COMMANDS.contains(&line.trim()) {
            break;
        }
        if !line.trim().is_empty() {
            editor.add_history_entry(line.as_str())?;
        }

        if let Some(output) = respond(chat, &line).await {
            println!("\n{output}\n");
        }
    }

    debug!(turns = chat.transcript().len(), "Chat session ended");
    Ok(())
}

/// Submit one line and format the assistant turn, if any was appended.
pub async fn respond(chat: &ChatOrchestrator, line: &str) -> Option<String> {
    match chat.submit(line).await {
        SubmitOutcome::Replied(turn) | SubmitOutcome::Errored(turn) => Some(format_turn(&turn)),
        SubmitOutcome::Ignored(IgnoreReason::Blank) => None,
        SubmitOutcome::Ignored(IgnoreReason::Busy) => {
            Some("Still waiting for the previous answer.".to_string())
        }
    }
}
