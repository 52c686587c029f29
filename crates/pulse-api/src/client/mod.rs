//! Pulse API client.
//!
//! This module provides the main client type. Operations live in the
//! `chat` and `integrations` submodules; the port implementation in
//! `port.rs` converts their wire types to core DTOs.

mod chat;
mod integrations;

use crate::config::PulseClientConfig;
use crate::error::ApiResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::ApiConfig;
use crate::url::parse_base_url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Pulse client using the reqwest HTTP backend.
pub type DefaultPulseClient = PulseApiClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the Pulse backend REST API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultPulseClient` for production code.
pub struct PulseApiClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: ApiConfig,
}

impl DefaultPulseClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails when the base URL is not an absolute http(s) URL or the HTTP
    /// client cannot be built.
    pub fn new(config: &PulseClientConfig) -> ApiResult<Self> {
        let internal_config = Self::to_internal_config(config)?;
        let backend = ReqwestBackend::new(&internal_config)?;
        Ok(Self {
            backend,
            config: internal_config,
        })
    }

    /// Create a new client with default configuration.
    pub fn default_client() -> ApiResult<Self> {
        Self::new(&PulseClientConfig::default())
    }

    fn to_internal_config(config: &PulseClientConfig) -> ApiResult<ApiConfig> {
        Ok(ApiConfig {
            base_url: parse_base_url(&config.base_url)?,
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
            token: config.token.clone(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        self.config.base_url.as_str()
    }
}

impl<B: HttpBackend> PulseApiClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: ApiConfig, backend: B) -> Self {
        Self { backend, config }
    }
}
