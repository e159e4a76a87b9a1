use std::time::Duration;

use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::domain::{AudioUpload, TranscribeResult, describe_error};

pub const AUDIO_TRANSCRIBE_PATH: &str = "/api/transcribe";
pub const YOUTUBE_TRANSCRIBE_PATH: &str = "/api/transcribe-yt";
pub const DEFAULT_CLIENT_TIMEOUT: Duration = Duration::from_secs(330);

const NETWORK_ERROR_PREFIX: &str = "Network or fetch error";

/// HTTP client for the transcription endpoints. Every call resolves to a
/// [`TranscribeResult`]; failures never surface as `Err`.
#[derive(Clone)]
pub struct TranscribeClient {
    http: reqwest::Client,
    base_url: String,
}

impl TranscribeClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        Self::with_timeout(base_url, DEFAULT_CLIENT_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_http_client(base_url, http))
    }

    pub fn with_http_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn transcribe_audio_file(&self, file: AudioUpload, model: &str) -> TranscribeResult {
        let form = Form::new()
            .part("audio", audio_part(&file))
            .text("model", model.to_string());

        match self.submit(AUDIO_TRANSCRIBE_PATH, form).await {
            Ok((status, body)) => interpret_response(status, &body, false),
            Err(e) => {
                tracing::error!(error = %e, "Error fetching audio transcription");
                network_failure(&e)
            }
        }
    }

    pub async fn transcribe_youtube_url(&self, url: &str, model: &str) -> TranscribeResult {
        let form = Form::new()
            .text("yt_url", url.to_string())
            .text("model", model.to_string());

        match self.submit(YOUTUBE_TRANSCRIBE_PATH, form).await {
            Ok((status, body)) => interpret_response(status, &body, true),
            Err(e) => {
                tracing::error!(error = %e, "Error fetching YouTube transcription");
                network_failure(&e)
            }
        }
    }

    async fn submit(&self, path: &str, form: Form) -> Result<(StatusCode, Value), reqwest::Error> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.json::<Value>().await?;

        Ok((status, body))
    }
}

fn audio_part(file: &AudioUpload) -> Part {
    let part = || Part::bytes(file.data.to_vec()).file_name(file.file_name.clone());
    match file.mime_type.as_deref() {
        Some(mime) => part().mime_str(mime).unwrap_or_else(|_| part()),
        None => part(),
    }
}

/// Maps a parsed response body onto the tagged result. A response only counts
/// as success when the status is 2xx and it carries a non-empty transcription.
fn interpret_response(status: StatusCode, body: &Value, with_html: bool) -> TranscribeResult {
    let text_field = |name: &str| body.get(name).and_then(Value::as_str);

    if status.is_success() {
        if let Some(transcription) = text_field("transcription").filter(|t| !t.is_empty()) {
            return if with_html {
                TranscribeResult::success_with_html(
                    transcription,
                    text_field("html").unwrap_or_default(),
                )
            } else {
                TranscribeResult::success(transcription)
            };
        }
    }

    let error = text_field("error")
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
    let details = text_field("details").map(str::to_string);

    tracing::error!(
        status = status.as_u16(),
        error = %error,
        details = details.as_deref().unwrap_or(""),
        "Transcription API error"
    );

    TranscribeResult::failure(error, details)
}

fn network_failure(err: &reqwest::Error) -> TranscribeResult {
    TranscribeResult::failure(
        format!("{}: {}", NETWORK_ERROR_PREFIX, describe_error(err)),
        None,
    )
}
