use axum::extract::Multipart;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::Response;

use crate::domain::{AudioUpload, ModelTier};

use super::responses::{request_failed, request_failed_with};

const AUDIO_FIELD: &str = "audio";
const YT_URL_FIELD: &str = "yt_url";
const MODEL_FIELD: &str = "model";
const DEFAULT_AUDIO_FILE_NAME: &str = "audio";

/// Fields accepted by both transcription endpoints. Empty values are
/// treated as absent.
#[derive(Debug, Default)]
pub struct TranscribeForm {
    pub audio: Option<AudioUpload>,
    pub yt_url: Option<String>,
    pub model: Option<String>,
}

impl TranscribeForm {
    pub fn tier(&self) -> ModelTier {
        ModelTier::from_selector(self.model.as_deref())
    }

    async fn read(mut multipart: Multipart) -> Result<Self, MultipartError> {
        let mut form = TranscribeForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some(AUDIO_FIELD) => {
                    let file_name = field
                        .file_name()
                        .filter(|name| !name.is_empty())
                        .unwrap_or(DEFAULT_AUDIO_FILE_NAME)
                        .to_string();
                    let mime_type = field.content_type().map(str::to_string);
                    let data = field.bytes().await?;
                    if !data.is_empty() {
                        form.audio = Some(AudioUpload::new(data, file_name, mime_type));
                    }
                }
                Some(YT_URL_FIELD) => {
                    form.yt_url = Some(field.text().await?).filter(|url| !url.trim().is_empty());
                }
                Some(MODEL_FIELD) => {
                    form.model = Some(field.text().await?).filter(|model| !model.is_empty());
                }
                other => tracing::debug!(field = ?other, "Ignoring unexpected form field"),
            }
        }

        Ok(form)
    }
}

/// Reads the multipart body, turning any extraction or parsing failure into
/// the generic transcription-failed response. A body over the upload limit
/// keeps its 413 status.
pub async fn read_form(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<TranscribeForm, Response> {
    let multipart = multipart.map_err(|e| {
        tracing::error!(error = %e, "Request body is not multipart form data");
        request_failed(&e)
    })?;

    TranscribeForm::read(multipart).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to read multipart form");
        match e.status() {
            StatusCode::PAYLOAD_TOO_LARGE => request_failed_with(StatusCode::PAYLOAD_TOO_LARGE, &e),
            _ => request_failed(&e),
        }
    })
}
