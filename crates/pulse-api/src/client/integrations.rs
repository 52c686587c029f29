//! Jira integration endpoints.

use pulse_core::DashboardSnapshot;

use crate::error::ApiResult;
use crate::http::HttpBackend;
use crate::models::{ConnectResponse, StatusResponse};
use crate::url::{Endpoint, build_endpoint_url};

use super::PulseApiClient;

impl<B: HttpBackend> PulseApiClient<B> {
    pub(crate) async fn get_jira_status(&self) -> ApiResult<StatusResponse> {
        let url = build_endpoint_url(&self.config, Endpoint::JiraStatus);
        self.backend.get_json(&url).await
    }

    /// Start the OAuth flow. The endpoint takes no body.
    pub(crate) async fn post_jira_connect(&self) -> ApiResult<ConnectResponse> {
        let url = build_endpoint_url(&self.config, Endpoint::JiraConnect);
        self.backend.post_json(&url, None).await
    }

    pub(crate) async fn delete_jira_integration(&self) -> ApiResult<()> {
        let url = build_endpoint_url(&self.config, Endpoint::JiraDisconnect);
        self.backend.delete(&url).await
    }

    pub(crate) async fn get_jira_dashboard_data(&self) -> ApiResult<DashboardSnapshot> {
        let url = build_endpoint_url(&self.config, Endpoint::JiraDashboardData);
        self.backend.get_json(&url).await
    }
}
