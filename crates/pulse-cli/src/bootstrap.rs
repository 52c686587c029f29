//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: the HTTP gateway (via pulse-api) and the session
//! services (via pulse-core).
//!
//! Command handlers receive the fully-composed `CliContext`.

use std::sync::Arc;
use std::time::Duration;

use pulse_api::{DefaultPulseClient, PulseClientConfig};
use pulse_core::ports::RemoteGatewayPort;
use pulse_core::services::PulseSession;
use pulse_core::{CoreError, PulseSettings, validate_settings};
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Session settings (base URL, history window, greeting).
    pub settings: PulseSettings,
    /// Bearer token for the signed-in user.
    pub token: Option<String>,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl CliConfig {
    /// Create config with default settings and no token.
    pub fn with_defaults() -> Self {
        Self {
            settings: PulseSettings::with_defaults(),
            token: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Build config from parsed global arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut config = Self::with_defaults();
        config.settings.api_base_url = cli.api_url.clone();
        config.settings.history_window = cli.history_window;
        config.token = cli.token.clone().filter(|t| !t.trim().is_empty());
        config.timeout = Duration::from_secs(cli.timeout_secs);
        config
    }

    /// Seed new conversations with the Ask Pulse greeting.
    #[must_use]
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.settings.greeting = Some(greeting.into());
        self
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The session facade.
    pub session: PulseSession,
    /// Backend base URL, for display.
    pub api_base_url: String,
}

impl CliContext {
    /// Access the session services.
    pub fn session(&self) -> &PulseSession {
        &self.session
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Validates the settings
/// 2. Creates the HTTP client for the backend
/// 3. Assembles the session services around it
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    validate_settings(&config.settings).map_err(CoreError::from)?;

    let api_base_url = config.settings.effective_api_base_url().to_string();
    let client_config = PulseClientConfig::new()
        .with_base_url(api_base_url.clone())
        .with_timeout(config.timeout)
        .with_optional_token(config.token.clone());
    let client = DefaultPulseClient::new(&client_config)?;
    debug!(base_url = %api_base_url, authenticated = config.token.is_some(), "Pulse client ready");

    Ok(bootstrap_with(Arc::new(client), &config.settings, api_base_url))
}

/// Bootstrap with a custom gateway (for testing).
pub fn bootstrap_with(
    gateway: Arc<dyn RemoteGatewayPort>,
    settings: &PulseSettings,
    api_base_url: String,
) -> CliContext {
    CliContext {
        session: PulseSession::new(gateway, settings),
        api_base_url,
    }
}
