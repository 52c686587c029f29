//! Shared fakes for pulse-core integration tests.

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pulse_core::{
    ChatTurnReply, ChatTurnRequest, DashboardSnapshot, GatewayError, GatewayResult,
    IntegrationStatus, OAuthInitiation, RemoteGatewayPort,
};
use tokio::sync::Notify;

/// Gateway fake with queued responses and recorded calls.
///
/// Empty queues fall back to: chat replies echo the message, status and
/// dashboard report 404, OAuth returns no URL, disconnect succeeds.
#[derive(Default)]
pub struct FakeGateway {
    pub chat_replies: Mutex<VecDeque<GatewayResult<ChatTurnReply>>>,
    pub statuses: Mutex<VecDeque<GatewayResult<IntegrationStatus>>>,
    pub snapshots: Mutex<VecDeque<GatewayResult<DashboardSnapshot>>>,
    pub chat_requests: Mutex<Vec<ChatTurnRequest>>,
    pub calls: Mutex<Vec<&'static str>>,
    /// When set, `send_chat_turn` waits for a notification before replying.
    pub chat_gate: Option<Arc<Notify>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            chat_gate: Some(gate),
            ..Self::default()
        }
    }

    pub fn push_chat(&self, reply: GatewayResult<ChatTurnReply>) {
        self.chat_replies.lock().unwrap().push_back(reply);
    }

    pub fn push_status(&self, status: GatewayResult<IntegrationStatus>) {
        self.statuses.lock().unwrap().push_back(status);
    }

    pub fn push_snapshot(&self, snapshot: GatewayResult<DashboardSnapshot>) {
        self.snapshots.lock().unwrap().push_back(snapshot);
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| **c == call).count()
    }

    pub fn requests(&self) -> Vec<ChatTurnRequest> {
        self.chat_requests.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl RemoteGatewayPort for FakeGateway {
    async fn send_chat_turn(&self, request: ChatTurnRequest) -> GatewayResult<ChatTurnReply> {
        self.record("send_chat_turn");
        self.chat_requests.lock().unwrap().push(request.clone());
        if let Some(gate) = &self.chat_gate {
            gate.notified().await;
        }
        let queued = self.chat_replies.lock().unwrap().pop_front();
        queued.unwrap_or_else(|| {
            Ok(ChatTurnReply {
                response: Some(format!("echo: {}", request.message)),
                function_calls: None,
            })
        })
    }

    async fn get_integration_status(&self) -> GatewayResult<IntegrationStatus> {
        self.record("get_integration_status");
        let queued = self.statuses.lock().unwrap().pop_front();
        queued.unwrap_or_else(|| Err(not_found()))
    }

    async fn initiate_oauth(&self) -> GatewayResult<OAuthInitiation> {
        self.record("initiate_oauth");
        Ok(OAuthInitiation::default())
    }

    async fn disconnect_integration(&self) -> GatewayResult<()> {
        self.record("disconnect_integration");
        Ok(())
    }

    async fn get_dashboard_snapshot(&self) -> GatewayResult<DashboardSnapshot> {
        self.record("get_dashboard_snapshot");
        let queued = self.snapshots.lock().unwrap().pop_front();
        queued.unwrap_or_else(|| Err(not_found()))
    }
}

pub fn not_found() -> GatewayError {
    GatewayError::NotFound {
        resource: "integration".to_string(),
    }
}

pub fn connected_status() -> IntegrationStatus {
    IntegrationStatus {
        is_connected: true,
        is_active: Some(true),
        site_name: Some("acme".to_string()),
        site_url: Some("https://acme.atlassian.net".to_string()),
        ..IntegrationStatus::default()
    }
}
