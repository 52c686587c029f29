//! URL construction helpers for the Pulse API.
//!
//! Pure functions so every call builds its URL the same way.

use crate::error::{ApiError, ApiResult};
use crate::models::ApiConfig;
use url::Url;

/// Backend REST endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    ChatMessage,
    JiraStatus,
    JiraConnect,
    JiraDisconnect,
    JiraDashboardData,
}

impl Endpoint {
    /// Path relative to the base URL. The backend requires the trailing slash.
    pub const fn path(self) -> &'static str {
        match self {
            Self::ChatMessage => "api/chat/message/",
            Self::JiraStatus => "api/integrations/jira/status/",
            Self::JiraConnect => "api/integrations/jira/connect/",
            Self::JiraDisconnect => "api/integrations/jira/disconnect/",
            Self::JiraDashboardData => "api/integrations/jira/dashboard-data/",
        }
    }
}

/// Parse and normalize a base URL: http(s) only, no query or fragment.
pub fn parse_base_url(raw: &str) -> ApiResult<Url> {
    let mut url = Url::parse(raw.trim())?;
    if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
        return Err(ApiError::ClientBuild {
            message: format!("base URL must be an absolute http(s) URL, got {raw:?}"),
        });
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// Build the full URL for an endpoint, keeping any base path prefix.
pub fn build_endpoint_url(config: &ApiConfig, endpoint: Endpoint) -> Url {
    let mut url = config.base_url.clone();
    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}/{}", endpoint.path()));
    url
}
