//! HTTP backend abstraction for the Pulse API.
//!
//! A trait-based backend keeps the client testable: production code uses
//! reqwest, tests use canned responses. Every request is a single attempt.

use crate::error::{ApiError, ApiResult};
use crate::models::{ApiConfig, ErrorBody};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that exchange JSON with the backend.
///
/// This is an implementation detail - external code should use the
/// `RemoteGatewayPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// GET a URL and deserialize the JSON body.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T>;

    /// POST an optional JSON body and deserialize the JSON response.
    async fn post_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        body: Option<serde_json::Value>,
    ) -> ApiResult<T>;

    /// DELETE a URL, ignoring any response body.
    async fn delete(&self, url: &Url) -> ApiResult<()>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
    auth_token: Option<String>,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ApiError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            auth_token: config.token.clone(),
        })
    }

    /// Build a request with optional bearer authentication.
    fn build_request(&self, method: reqwest::Method, url: &Url) -> reqwest::RequestBuilder {
        let mut request = self.client.request(method, url.as_str());
        if let Some(ref token) = self.auth_token {
            request = request.bearer_auth(token);
        }
        request
    }

    /// Send a request once and turn non-success statuses into errors.
    async fn send(&self, request: reqwest::RequestBuilder, url: &Url) -> ApiResult<reqwest::Response> {
        let response = request.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %url, "Pulse API response");

        if status.is_success() {
            return Ok(response);
        }

        // Error bodies are best effort; an unreadable body just means no message.
        let message = response
            .text()
            .await
            .ok()
            .and_then(|text| serde_json::from_str::<ErrorBody>(&text).ok())
            .and_then(ErrorBody::into_message);

        Err(ApiError::Status {
            status: status.as_u16(),
            url: url.to_string(),
            message,
        })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T> {
        debug!(method = "GET", url = %url, "Pulse API request");
        let request = self.build_request(reqwest::Method::GET, url);
        let response = self.send(request, url).await?;
        let data: T = response.json().await?;
        Ok(data)
    }

    async fn post_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        body: Option<serde_json::Value>,
    ) -> ApiResult<T> {
        debug!(method = "POST", url = %url, "Pulse API request");
        let mut request = self.build_request(reqwest::Method::POST, url);
        if let Some(body) = body {
            request = request.json(&body);
        }
        let response = self.send(request, url).await?;
        let data: T = response.json().await?;
        Ok(data)
    }

    async fn delete(&self, url: &Url) -> ApiResult<()> {
        debug!(method = "DELETE", url = %url, "Pulse API request");
        let request = self.build_request(reqwest::Method::DELETE, url);
        self.send(request, url).await?;
        Ok(())
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
