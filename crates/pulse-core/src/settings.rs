//! Settings domain types and validation.
//!
//! These are pure domain types with no infrastructure dependencies. Front
//! ends fill them from flags, environment or files and validate before
//! wiring services.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

/// Default backend base URL.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Default post-redirect reconciliation delay in milliseconds.
pub const DEFAULT_RECONCILE_DELAY_MS: u64 = 1000;

/// Upper bound for the reconciliation delay.
pub const MAX_RECONCILE_DELAY_MS: u64 = 60_000;

/// Session settings.
///
/// Optional fields fall back to the defaults above.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PulseSettings {
    /// Backend base URL (scheme and host, optional path prefix).
    pub api_base_url: Option<String>,

    /// Delay before re-reading integration status after an OAuth redirect.
    pub reconcile_delay_ms: Option<u64>,

    /// Assistant turn seeded into a new transcript. No greeting when `None`.
    pub greeting: Option<String>,

    /// Number of most recent turns sent as conversation history.
    /// The full transcript is sent when `None`.
    pub history_window: Option<usize>,
}

impl PulseSettings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            api_base_url: None,
            reconcile_delay_ms: Some(DEFAULT_RECONCILE_DELAY_MS),
            greeting: None,
            history_window: None,
        }
    }

    #[must_use]
    pub fn effective_api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    #[must_use]
    pub const fn reconcile_delay(&self) -> Duration {
        match self.reconcile_delay_ms {
            Some(ms) => Duration::from_millis(ms),
            None => Duration::from_millis(DEFAULT_RECONCILE_DELAY_MS),
        }
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("API base URL must be an absolute http(s) URL, got {0:?}")]
    InvalidBaseUrl(String),

    #[error("Reconcile delay must be at most {MAX_RECONCILE_DELAY_MS} ms, got {0}")]
    InvalidReconcileDelay(u64),

    #[error("History window must be at least 1 turn")]
    InvalidHistoryWindow,

    #[error("Greeting cannot be empty")]
    EmptyGreeting,
}

/// Validate settings values.
pub fn validate_settings(settings: &PulseSettings) -> Result<(), SettingsError> {
    if let Some(base) = settings.api_base_url.as_deref() {
        let valid = Url::parse(base)
            .is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host());
        if !valid {
            return Err(SettingsError::InvalidBaseUrl(base.to_string()));
        }
    }

    if let Some(delay) = settings.reconcile_delay_ms {
        if delay > MAX_RECONCILE_DELAY_MS {
            return Err(SettingsError::InvalidReconcileDelay(delay));
        }
    }

    if settings.history_window == Some(0) {
        return Err(SettingsError::InvalidHistoryWindow);
    }

    if settings
        .greeting
        .as_ref()
        .is_some_and(|g| g.trim().is_empty())
    {
        return Err(SettingsError::EmptyGreeting);
    }

    Ok(())
}
