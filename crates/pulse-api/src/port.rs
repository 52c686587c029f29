//! Port trait implementation for `PulseApiClient`.
//!
//! This module implements the core-owned `RemoteGatewayPort` trait,
//! converting wire types to core DTOs and HTTP failures to `GatewayError`.

use async_trait::async_trait;
use pulse_core::ports::{
    ChatTurnReply, ChatTurnRequest, GatewayError, GatewayResult, OAuthInitiation,
    RemoteGatewayPort,
};
use pulse_core::{DashboardSnapshot, IntegrationStatus};
use tracing::debug;

use crate::client::PulseApiClient;
use crate::error::ApiError;
use crate::http::HttpBackend;
use crate::models::{ChatMessageResponse, ConnectResponse, StatusResponse, parse_timestamp};

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ApiError` to core `GatewayError`.
fn map_error(err: ApiError) -> GatewayError {
    match err {
        ApiError::Status {
            status,
            url,
            message,
        } => match status {
            404 => GatewayError::NotFound {
                resource: resource_from_url(&url),
            },
            401 | 403 => GatewayError::Unauthenticated,
            _ => GatewayError::Api { status, message },
        },
        ApiError::InvalidResponse { message } => GatewayError::InvalidResponse { message },
        ApiError::ClientBuild { message } => GatewayError::Configuration { message },
        ApiError::Network(e) if e.is_decode() => GatewayError::InvalidResponse {
            message: e.to_string(),
        },
        ApiError::Network(e) => GatewayError::Network {
            message: e.to_string(),
        },
        ApiError::InvalidUrl(e) => GatewayError::Configuration {
            message: e.to_string(),
        },
        ApiError::JsonParse(e) => GatewayError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

/// Last meaningful path segment of an endpoint URL, e.g. `status`.
fn resource_from_url(url: &str) -> String {
    url.split(['?', '#'])
        .next()
        .unwrap_or(url)
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(url)
        .to_string()
}

// ============================================================================
// Type Conversions
// ============================================================================

fn to_reply(response: ChatMessageResponse) -> ChatTurnReply {
    ChatTurnReply {
        response: response.response,
        function_calls: response.function_calls,
    }
}

fn to_status(response: StatusResponse) -> IntegrationStatus {
    let needs_reauth = response.reauth_hint();
    IntegrationStatus {
        is_connected: response.is_connected,
        site_name: response.site_name,
        site_url: response.site_url,
        is_active: response.is_active,
        is_token_expired: response.is_token_expired,
        needs_reauth,
        last_sync_at: parse_timestamp(response.last_sync_at.as_deref()),
        created_at: parse_timestamp(response.created_at.as_deref()),
        message: response.message,
    }
}

fn to_initiation(response: ConnectResponse) -> OAuthInitiation {
    OAuthInitiation {
        authorization_url: response.authorization_url,
        state: response.state,
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> RemoteGatewayPort for PulseApiClient<B> {
    async fn send_chat_turn(&self, request: ChatTurnRequest) -> GatewayResult<ChatTurnReply> {
        let response = self.post_chat_message(&request).await.map_err(map_error)?;
        debug!(function_calls = ?response.function_calls, "Chat reply received");
        Ok(to_reply(response))
    }

    async fn get_integration_status(&self) -> GatewayResult<IntegrationStatus> {
        let response = self.get_jira_status().await.map_err(map_error)?;
        Ok(to_status(response))
    }

    async fn initiate_oauth(&self) -> GatewayResult<OAuthInitiation> {
        let response = self.post_jira_connect().await.map_err(map_error)?;
        Ok(to_initiation(response))
    }

    async fn disconnect_integration(&self) -> GatewayResult<()> {
        self.delete_jira_integration().await.map_err(map_error)
    }

    async fn get_dashboard_snapshot(&self) -> GatewayResult<DashboardSnapshot> {
        self.get_jira_dashboard_data().await.map_err(map_error)
    }
}
