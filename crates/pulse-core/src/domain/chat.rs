//! Chat domain types.
//!
//! A conversation is a linear, append-only transcript of turns. Turns are
//! immutable once appended; the transcript itself is copy-on-append so a
//! snapshot taken at submission time never observes later turns.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The author of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

impl TurnRole {
    /// Wire string for this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for TurnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One message in a transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub id: Uuid,
    pub role: TurnRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Number of backend tool calls the assistant made to produce this turn.
    pub function_call_count: Option<u32>,
}

impl ChatTurn {
    /// A turn typed by the user.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(TurnRole::User, content.into(), None)
    }

    /// A turn produced by the assistant (or standing in for it on failure).
    pub fn assistant(content: impl Into<String>, function_call_count: Option<u32>) -> Self {
        Self::new(TurnRole::Assistant, content.into(), function_call_count)
    }

    fn new(role: TurnRole, content: String, function_call_count: Option<u32>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content,
            created_at: Utc::now(),
            function_call_count,
        }
    }

    /// Project this turn onto the outbound history shape.
    #[must_use]
    pub fn to_history_entry(&self) -> ConversationHistoryEntry {
        ConversationHistoryEntry {
            role: self.role,
            content: self.content.clone(),
        }
    }

    /// Badge text for turns that triggered backend calls, e.g. `"2 Jira calls"`.
    #[must_use]
    pub fn function_call_label(&self) -> Option<String> {
        match self.function_call_count {
            Some(0) | None => None,
            Some(1) => Some("1 Jira call".to_string()),
            Some(n) => Some(format!("{n} Jira calls")),
        }
    }
}

/// Wire-level projection of a turn, sent as conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationHistoryEntry {
    pub role: TurnRole,
    pub content: String,
}

/// Append-only ordered sequence of turns.
///
/// Cloning is cheap (shared storage). `appended` produces a new transcript
/// and leaves `self` untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    turns: Arc<[ChatTurn]>,
}

impl Transcript {
    /// An empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new transcript with `turn` at the end.
    #[must_use]
    pub fn appended(&self, turn: ChatTurn) -> Self {
        let mut turns = Vec::with_capacity(self.turns.len() + 1);
        turns.extend(self.turns.iter().cloned());
        turns.push(turn);
        Self {
            turns: turns.into(),
        }
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&ChatTurn> {
        self.turns.last()
    }

    /// Project the transcript onto history entries.
    ///
    /// `window` keeps only the most recent `n` turns; `None` keeps all.
    #[must_use]
    pub fn history(&self, window: Option<usize>) -> Vec<ConversationHistoryEntry> {
        let skip = window.map_or(0, |n| self.turns.len().saturating_sub(n));
        self.turns
            .iter()
            .skip(skip)
            .map(ChatTurn::to_history_entry)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a ChatTurn;
    type IntoIter = std::slice::Iter<'a, ChatTurn>;

    fn into_iter(self) -> Self::IntoIter {
        self.turns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_strings() {
        assert_eq!(TurnRole::User.as_str(), "user");
        assert_eq!(TurnRole::Assistant.to_string(), "assistant");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&TurnRole::User).unwrap();
        assert_eq!(json, "\"user\"");
    }

    #[test]
    fn test_appended_leaves_original_untouched() {
        let empty = Transcript::new();
        let one = empty.appended(ChatTurn::user("hello"));
        let two = one.appended(ChatTurn::assistant("hi", None));

        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
        assert_eq!(two.len(), 2);
        assert_eq!(two.turns()[0].content, "hello");
        assert_eq!(two.last().unwrap().role, TurnRole::Assistant);
    }

    #[test]
    fn test_history_projection_and_window() {
        let transcript = Transcript::new()
            .appended(ChatTurn::user("a"))
            .appended(ChatTurn::assistant("b", Some(1)))
            .appended(ChatTurn::user("c"));

        let full = transcript.history(None);
        assert_eq!(full.len(), 3);
        assert_eq!(full[1].role, TurnRole::Assistant);
        assert_eq!(full[1].content, "b");

        let windowed = transcript.history(Some(2));
        assert_eq!(windowed.len(), 2);
        assert_eq!(windowed[0].content, "b");

        assert_eq!(transcript.history(Some(10)).len(), 3);
    }

    #[test]
    fn test_function_call_label() {
        assert_eq!(ChatTurn::assistant("x", None).function_call_label(), None);
        assert_eq!(ChatTurn::assistant("x", Some(0)).function_call_label(), None);
        assert_eq!(
            ChatTurn::assistant("x", Some(1)).function_call_label().as_deref(),
            Some("1 Jira call")
        );
        assert_eq!(
            ChatTurn::assistant("x", Some(3)).function_call_label().as_deref(),
            Some("3 Jira calls")
        );
    }
}
