//! Remote gateway port trait.

use async_trait::async_trait;

use super::error::GatewayResult;
use super::types::{ChatTurnReply, ChatTurnRequest, OAuthInitiation};
use crate::domain::{DashboardSnapshot, IntegrationStatus};

/// Port trait for the Pulse backend.
///
/// The implementation lives in `pulse-api`.
///
/// # Design
///
/// - Uses core-owned DTOs, not wire types
/// - Returns `GatewayError` for all failures; a missing resource is
///   `GatewayError::NotFound`, which callers usually treat as a state
/// - Every call is a single independent attempt; no retries happen here
#[async_trait]
pub trait RemoteGatewayPort: Send + Sync {
    /// Send one user message with the prior conversation to the assistant.
    async fn send_chat_turn(&self, request: ChatTurnRequest) -> GatewayResult<ChatTurnReply>;

    /// Fetch the user's Jira integration status.
    async fn get_integration_status(&self) -> GatewayResult<IntegrationStatus>;

    /// Start the Jira OAuth flow.
    async fn initiate_oauth(&self) -> GatewayResult<OAuthInitiation>;

    /// Remove the user's Jira integration.
    async fn disconnect_integration(&self) -> GatewayResult<()>;

    /// Fetch the aggregated dashboard data.
    async fn get_dashboard_snapshot(&self) -> GatewayResult<DashboardSnapshot>;
}
