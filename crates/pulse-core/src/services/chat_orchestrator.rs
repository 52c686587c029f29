//! Conversation orchestrator - owns the transcript and the turn protocol.
//!
//! Each submission appends the user turn optimistically, sends exactly one
//! request with the prior transcript as history, and always appends exactly
//! one assistant turn: the reply, or an inline error message. Failures never
//! escape as `Err`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::domain::{ChatTurn, Transcript};
use crate::ports::{ChatTurnReply, ChatTurnRequest, GatewayError, RemoteGatewayPort};
use crate::services::busy::BusyLatch;

/// Shown when the assistant replied without any text.
pub const EMPTY_REPLY_FALLBACK: &str = "I apologize, but I couldn't generate a response.";

/// Used when a failure carries no usable description.
pub const SEND_FAILURE_FALLBACK: &str = "Failed to send message";

/// Greeting shown at the top of a fresh Ask Pulse conversation.
pub const DEFAULT_GREETING: &str = "Hi! I'm Ask Pulse, your AI assistant for project management \
and Jira analytics. I can help you understand your projects, track issues, and get insights \
from your Jira data. What would you like to know?";

/// Why a submission was dropped without touching the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The text was empty after trimming.
    Blank,
    /// Another submission is still in flight.
    Busy,
}

/// Result of [`ChatOrchestrator::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Ignored(IgnoreReason),
    /// The assistant answered; the turn has been appended.
    Replied(ChatTurn),
    /// The call failed; an error turn has been appended.
    Errored(ChatTurn),
}

impl SubmitOutcome {
    /// The assistant-side turn appended by this submission, if any.
    #[must_use]
    pub const fn turn(&self) -> Option<&ChatTurn> {
        match self {
            Self::Ignored(_) => None,
            Self::Replied(turn) | Self::Errored(turn) => Some(turn),
        }
    }
}

/// Owns one conversation for the lifetime of a session.
pub struct ChatOrchestrator {
    gateway: Arc<dyn RemoteGatewayPort>,
    transcript: Mutex<Transcript>,
    pending: BusyLatch,
    history_window: Option<usize>,
}

impl ChatOrchestrator {
    /// Create an orchestrator with an empty transcript.
    pub fn new(gateway: Arc<dyn RemoteGatewayPort>) -> Self {
        Self {
            gateway,
            transcript: Mutex::new(Transcript::new()),
            pending: BusyLatch::new(),
            history_window: None,
        }
    }

    /// Seed the transcript with an assistant greeting.
    ///
    /// The greeting is part of the transcript and is therefore sent as history.
    #[must_use]
    pub fn with_greeting(self, greeting: impl Into<String>) -> Self {
        {
            let mut transcript = self.lock_transcript();
            *transcript = transcript.appended(ChatTurn::assistant(greeting, None));
        }
        self
    }

    /// Only send the last `window` turns as history (`None` sends all).
    #[must_use]
    pub const fn with_history_window(mut self, window: Option<usize>) -> Self {
        self.history_window = window;
        self
    }

    /// Snapshot of the transcript.
    pub fn transcript(&self) -> Transcript {
        self.lock_transcript().clone()
    }

    /// Whether a submission is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending.is_busy()
    }

    /// Submit one user message.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let message = text.trim();
        if message.is_empty() {
            return SubmitOutcome::Ignored(IgnoreReason::Blank);
        }

        let Some(_pending) = self.pending.try_acquire() else {
            debug!("Dropping chat submission: a turn is already in flight");
            return SubmitOutcome::Ignored(IgnoreReason::Busy);
        };

        let conversation_history = {
            let mut transcript = self.lock_transcript();
            let history = transcript.history(self.history_window);
            *transcript = transcript.appended(ChatTurn::user(message));
            history
        };

        debug!(
            history_len = conversation_history.len(),
            "Sending chat turn"
        );
        let request = ChatTurnRequest {
            message: message.to_string(),
            conversation_history,
        };

        let outcome = match self.gateway.send_chat_turn(request).await {
            Ok(reply) => SubmitOutcome::Replied(reply_turn(reply)),
            Err(err) => {
                warn!(error = %err, "Chat turn failed");
                SubmitOutcome::Errored(error_turn(&err))
            }
        };

        if let Some(turn) = outcome.turn() {
            let mut transcript = self.lock_transcript();
            *transcript = transcript.appended(turn.clone());
        }
        outcome
    }

    fn lock_transcript(&self) -> MutexGuard<'_, Transcript> {
        // Turns are only ever replaced whole, so a poisoned value is still consistent.
        self.transcript
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

fn reply_turn(reply: ChatTurnReply) -> ChatTurn {
    let content = reply
        .response
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| EMPTY_REPLY_FALLBACK.to_string());
    ChatTurn::assistant(content, reply.function_calls)
}

fn error_turn(err: &GatewayError) -> ChatTurn {
    ChatTurn::assistant(
        format!("Sorry, I encountered an error: {}", error_summary(err)),
        None,
    )
}

/// Pick the most specific human-readable description of a failure.
pub(crate) fn error_summary(err: &GatewayError) -> String {
    if let Some(message) = err.structured_message().filter(|m| !m.trim().is_empty()) {
        return message.to_string();
    }
    let generic = err.to_string();
    if generic.trim().is_empty() {
        SEND_FAILURE_FALLBACK.to_string()
    } else {
        generic
    }
}
