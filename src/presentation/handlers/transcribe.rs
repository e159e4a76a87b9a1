use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::presentation::state::AppState;

use super::form::read_form;
use super::responses::{NO_AUDIO_PROVIDED, bad_request, service_error_response};

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub transcription: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let service = &state.transcription_service;

    let credential = match service.credential() {
        Ok(credential) => credential,
        Err(e) => {
            tracing::error!(error = %e, "Remote credential is not configured");
            return service_error_response(&e);
        }
    };

    let form = match read_form(multipart).await {
        Ok(form) => form,
        Err(response) => return response,
    };

    let tier = form.tier();
    let Some(audio) = form.audio else {
        tracing::warn!("Transcription request with no audio file");
        return bad_request(NO_AUDIO_PROVIDED);
    };

    tracing::debug!(
        file_name = %audio.file_name,
        mime_type = audio.mime_or_default(),
        bytes = audio.len(),
        tier = %tier,
        "Audio received"
    );

    match service.transcribe_audio(&credential, audio, tier).await {
        Ok(transcript) => {
            tracing::info!(
                chars = transcript.transcription.len(),
                tier = %tier,
                "Audio transcription completed"
            );
            (
                StatusCode::OK,
                Json(TranscribeResponse {
                    transcription: transcript.transcription,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, tier = %tier, "Audio transcription failed");
            service_error_response(&e)
        }
    }
}
