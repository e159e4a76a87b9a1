use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::application::ports::{InferenceError, InferenceSession, PredictInput};
use crate::domain::AudioUpload;
use crate::infrastructure::observability::sanitize_for_log;

use super::event_stream::{parse_event_stream, resolve_prediction};

/// Session against one Gradio app, rooted at its API prefix.
pub struct GradioSession {
    http: reqwest::Client,
    root: String,
    token: String,
}

#[derive(Deserialize)]
struct CallResponse {
    event_id: String,
}

impl GradioSession {
    pub fn new(http: reqwest::Client, root: String, token: String) -> Self {
        Self { http, root, token }
    }

    async fn upload(&self, audio: AudioUpload) -> Result<Value, InferenceError> {
        let mime_type = audio.mime_or_default().to_string();
        let file_name = audio.file_name.clone();

        let part = || multipart::Part::bytes(audio.data.to_vec()).file_name(file_name.clone());
        let file_part = part().mime_str(&mime_type).unwrap_or_else(|_| {
            tracing::debug!(mime_type = %mime_type, "Unparseable MIME type, sending untyped part");
            part()
        });
        let form = multipart::Form::new().part("files", file_part);

        tracing::debug!(
            file_name = %file_name,
            bytes = audio.data.len(),
            "Uploading audio to Gradio app"
        );

        let response = self
            .http
            .post(format!("{}/upload", self.root))
            .bearer_auth(&self.token)
            .multipart(form)
            .send()
            .await
            .map_err(|e| InferenceError::UploadFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::UploadFailed(status_failure(status, &body)));
        }

        let paths: Vec<String> = response
            .json()
            .await
            .map_err(|e| InferenceError::UploadFailed(format!("parse response: {}", e)))?;
        let path = paths
            .into_iter()
            .next()
            .ok_or_else(|| InferenceError::UploadFailed("no file path returned".to_string()))?;

        Ok(json!({
            "path": path,
            "orig_name": file_name,
            "mime_type": mime_type,
            "meta": { "_type": "gradio.FileData" },
        }))
    }

    async fn submit(&self, api_name: &str, data: Vec<Value>) -> Result<String, InferenceError> {
        let response = self
            .http
            .post(format!("{}/call/{}", self.root, api_name))
            .bearer_auth(&self.token)
            .json(&json!({ "data": data }))
            .send()
            .await
            .map_err(|e| InferenceError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::ApiRequestFailed(status_failure(status, &body)));
        }

        let call: CallResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(format!("call response: {}", e)))?;

        Ok(call.event_id)
    }

    async fn fetch_result(&self, api_name: &str, event_id: &str) -> Result<String, InferenceError> {
        let response = self
            .http
            .get(format!("{}/call/{}/{}", self.root, api_name, event_id))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| InferenceError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::ApiRequestFailed(status_failure(status, &body)));
        }

        response
            .text()
            .await
            .map_err(|e| InferenceError::ApiRequestFailed(format!("body: {}", e)))
    }
}

#[async_trait]
impl InferenceSession for GradioSession {
    async fn predict(
        &self,
        endpoint: &str,
        inputs: Vec<PredictInput>,
    ) -> Result<Vec<Value>, InferenceError> {
        let api_name = endpoint.trim_start_matches('/');

        let mut data = Vec::with_capacity(inputs.len());
        for input in inputs {
            let value = match input {
                PredictInput::Text(text) => Value::String(text),
                PredictInput::File(audio) => self.upload(audio).await?,
            };
            data.push(value);
        }

        let event_id = self.submit(api_name, data).await?;
        tracing::debug!(api_name, event_id = %event_id, "Prediction queued");

        let body = self.fetch_result(api_name, &event_id).await?;
        resolve_prediction(&parse_event_stream(&body))
    }
}

/// Summarizes a non-2xx reply; remote bodies can be whole HTML pages.
pub(super) fn status_failure(status: reqwest::StatusCode, body: &str) -> String {
    format!("status {}: {}", status, sanitize_for_log(body))
}
