//! Third-party integration status types.
//!
//! The status record is always taken whole from the server (or derived
//! whole from a failed fetch). Consumers should only ever branch on
//! [`IntegrationStatus::effective_connected`] or [`ConnectionState`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message attached to the derived record when no integration exists.
pub const NO_INTEGRATION_MESSAGE: &str = "No integration found";

/// Message attached to the derived record when the status fetch failed.
pub const STATUS_UNAVAILABLE_MESSAGE: &str = "Failed to fetch status";

/// Server-reported state of the user's Jira link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationStatus {
    pub is_connected: bool,
    pub site_name: Option<String>,
    pub site_url: Option<String>,
    pub is_active: Option<bool>,
    pub is_token_expired: bool,
    /// Server hint that the user must re-run the OAuth flow
    /// (expired token or outdated scopes).
    pub needs_reauth: Option<bool>,
    pub last_sync_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    /// Explanation attached to records derived locally after a failed fetch.
    pub message: Option<String>,
}

impl IntegrationStatus {
    /// A record standing for "no usable integration".
    pub fn disconnected(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// The only boolean that means "the integration can be used".
    #[must_use]
    pub fn effective_connected(&self) -> bool {
        self.is_connected && self.is_active == Some(true) && !self.is_token_expired
    }

    /// Whether the server asked for a new authorization round trip.
    #[must_use]
    pub fn requires_reauthorization(&self) -> bool {
        self.needs_reauth.unwrap_or(false) || (self.is_connected && self.is_token_expired)
    }
}

/// Derived lifecycle state of the integration link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    /// No status fetch has completed yet.
    Unknown,
    Disconnected,
    /// An authorization round trip was started from this session.
    PendingAuthorization,
    Connected,
    /// Linked, but the token expired or the link was deactivated.
    ExpiredOrInactive,
}

impl ConnectionState {
    /// Derive the state from the last status record.
    ///
    /// `authorizing` is the client-local flag set while an OAuth handoff is
    /// under way; it only matters while the link is not yet usable.
    #[must_use]
    pub fn derive(status: Option<&IntegrationStatus>, authorizing: bool) -> Self {
        let Some(status) = status else {
            return if authorizing {
                Self::PendingAuthorization
            } else {
                Self::Unknown
            };
        };

        if status.effective_connected() {
            Self::Connected
        } else if authorizing {
            Self::PendingAuthorization
        } else if status.is_connected {
            Self::ExpiredOrInactive
        } else {
            Self::Disconnected
        }
    }

    #[must_use]
    pub const fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Disconnected => "disconnected",
            Self::PendingAuthorization => "pending authorization",
            Self::Connected => "connected",
            Self::ExpiredOrInactive => "expired or inactive",
        }
    }
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
