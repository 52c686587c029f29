//! DTOs exchanged over the remote gateway port.

use serde::{Deserialize, Serialize};

use crate::domain::ConversationHistoryEntry;

/// Outbound chat request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurnRequest {
    pub message: String,
    /// Transcript prior to `message`; never contains `message` itself.
    pub conversation_history: Vec<ConversationHistoryEntry>,
}

/// Assistant reply to a chat request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurnReply {
    pub response: Option<String>,
    pub function_calls: Option<u32>,
}

/// Result of starting the OAuth flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthInitiation {
    /// Provider URL the user must be sent to.
    pub authorization_url: Option<String>,
    /// Opaque anti-forgery state echoed back by the provider.
    pub state: Option<String>,
}
