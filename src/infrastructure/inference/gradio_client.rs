use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{InferenceClient, InferenceError, InferenceSession};
use crate::domain::SpaceId;

use super::gradio_session::{GradioSession, status_failure};

pub const DEFAULT_HUB_BASE_URL: &str = "https://huggingface.co";

/// Connects to Gradio apps hosted on the Hugging Face hub (or reachable at a
/// direct URL) over Gradio's HTTP API.
pub struct GradioClient {
    http: reqwest::Client,
    hub_base_url: String,
}

#[derive(Deserialize)]
struct SpaceHostResponse {
    host: String,
}

#[derive(Deserialize)]
struct AppConfig {
    #[serde(default)]
    api_prefix: Option<String>,
}

impl GradioClient {
    pub fn new(
        hub_base_url: impl Into<String>,
        connect_timeout: Duration,
    ) -> Result<Self, InferenceError> {
        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .user_agent(concat!("transcribe-relay/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| InferenceError::ApiRequestFailed(format!("http client: {}", e)))?;

        Ok(Self {
            http,
            hub_base_url: hub_base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn resolve_host(&self, space: &SpaceId, token: &str) -> Result<String, InferenceError> {
        if space.is_direct_url() {
            return Ok(space.as_str().trim_end_matches('/').to_string());
        }

        let url = format!("{}/api/spaces/{}/host", self.hub_base_url, space);
        let resolution_failed = |reason: String| InferenceError::SpaceResolutionFailed {
            space: space.to_string(),
            reason,
        };

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| resolution_failed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(resolution_failed(status_failure(status, &body)));
        }

        let resolved: SpaceHostResponse = response
            .json()
            .await
            .map_err(|e| resolution_failed(format!("parse response: {}", e)))?;

        Ok(resolved.host.trim_end_matches('/').to_string())
    }

    async fn api_root(
        &self,
        space: &SpaceId,
        host: &str,
        token: &str,
    ) -> Result<String, InferenceError> {
        let connection_failed = |reason: String| InferenceError::ConnectionFailed {
            space: space.to_string(),
            reason,
        };

        let response = self
            .http
            .get(format!("{}/config", host))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| connection_failed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(connection_failed(status_failure(status, &body)));
        }

        let config: AppConfig = response
            .json()
            .await
            .map_err(|e| connection_failed(format!("parse config: {}", e)))?;

        let prefix = config.api_prefix.unwrap_or_default();
        Ok(format!("{}{}", host, prefix.trim_end_matches('/')))
    }
}

#[async_trait]
impl InferenceClient for GradioClient {
    async fn connect(
        &self,
        space: &SpaceId,
        token: &str,
    ) -> Result<Box<dyn InferenceSession>, InferenceError> {
        let host = self.resolve_host(space, token).await?;
        let root = self.api_root(space, &host, token).await?;

        tracing::debug!(space = %space, root = %root, "Connected to Gradio app");

        Ok(Box::new(GradioSession::new(
            self.http.clone(),
            root,
            token.to_string(),
        )))
    }
}
