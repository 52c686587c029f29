//! Chat endpoint.

use pulse_core::ChatTurnRequest;

use crate::error::ApiResult;
use crate::http::HttpBackend;
use crate::models::{ChatMessageBody, ChatMessageResponse, HistoryItem};
use crate::url::{Endpoint, build_endpoint_url};

use super::PulseApiClient;

impl<B: HttpBackend> PulseApiClient<B> {
    /// Send one message with its prior conversation.
    pub(crate) async fn post_chat_message(
        &self,
        request: &ChatTurnRequest,
    ) -> ApiResult<ChatMessageResponse> {
        let body = ChatMessageBody {
            message: request.message.clone(),
            conversation_history: request
                .conversation_history
                .iter()
                .map(|entry| HistoryItem {
                    role: entry.role.as_str(),
                    content: entry.content.clone(),
                })
                .collect(),
        };

        let url = build_endpoint_url(&self.config, Endpoint::ChatMessage);
        self.backend
            .post_json(&url, Some(serde_json::to_value(&body)?))
            .await
    }
}
