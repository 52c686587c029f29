//! Internal wire types for the Pulse backend.
//!
//! These types are internal to `pulse-api` and are not exposed to consumers.
//! External consumers should use the port DTOs defined in `pulse-core`.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the Pulse client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend, always ending in `/`
    pub base_url: Url,
    pub user_agent: String,
    pub timeout: Duration,
    /// Bearer token attached to every request when set
    pub token: Option<String>,
}

// ============================================================================
// Chat
// ============================================================================

/// Body of `POST /api/chat/message/`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessageBody {
    pub message: String,
    pub conversation_history: Vec<HistoryItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryItem {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChatMessageResponse {
    pub response: Option<String>,
    pub function_calls: Option<u32>,
}

// ============================================================================
// Integration
// ============================================================================

/// Body of `GET /api/integrations/jira/status/`.
///
/// The backend serializes several booleans as strings (`"True"`, `"true"`),
/// so they are read leniently.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatusResponse {
    #[serde(deserialize_with = "lenient_bool")]
    pub is_connected: bool,
    pub site_name: Option<String>,
    pub site_url: Option<String>,
    pub is_active: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_token_expired: bool,
    #[serde(deserialize_with = "lenient_opt_bool")]
    pub has_outdated_scopes: Option<bool>,
    #[serde(deserialize_with = "lenient_opt_bool")]
    pub needs_reauth: Option<bool>,
    pub last_sync_at: Option<String>,
    pub created_at: Option<String>,
    pub message: Option<String>,
}

impl StatusResponse {
    /// Combined re-authorization hint, absent when the backend sent neither flag.
    pub fn reauth_hint(&self) -> Option<bool> {
        match (self.needs_reauth, self.has_outdated_scopes) {
            (None, None) => None,
            (a, b) => Some(a.unwrap_or(false) || b.unwrap_or(false)),
        }
    }
}

/// Body of `POST /api/integrations/jira/connect/`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConnectResponse {
    pub authorization_url: Option<String>,
    pub state: Option<String>,
}

/// Error body used by every endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ErrorBody {
    /// `error` wins over `message`; blank strings count as absent.
    pub fn into_message(self) -> Option<String> {
        self.error
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.message.filter(|s| !s.trim().is_empty()))
    }
}

// ============================================================================
// Lenient decoding
// ============================================================================

/// Only JSON `true` or the string `"true"` (any case) count as true.
fn truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(truthy(&value))
}

fn lenient_opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(if value.is_null() {
        None
    } else {
        Some(truthy(&value))
    })
}

/// Parse an RFC 3339 timestamp, dropping anything unparseable.
pub fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}
