use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

use super::form::read_form;
use super::responses::{NO_YOUTUBE_URL_PROVIDED, bad_request, service_error_response};

#[derive(Serialize)]
pub struct TranscribeYoutubeResponse {
    pub html: String,
    pub transcription: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_yt_handler(
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
    let Some(url) = form.yt_url else {
        tracing::warn!("Transcription request with no YouTube URL");
        return bad_request(NO_YOUTUBE_URL_PROVIDED);
    };

    tracing::debug!(url = %sanitize_for_log(&url), tier = %tier, "Video URL received");

    match service.transcribe_video_url(&credential, &url, tier).await {
        Ok(transcript) => {
            tracing::info!(
                chars = transcript.transcription.len(),
                html_chars = transcript.html.len(),
                tier = %tier,
                "Video transcription completed"
            );
            (
                StatusCode::OK,
                Json(TranscribeYoutubeResponse {
                    html: transcript.html,
                    transcription: transcript.transcription,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(
                error = %sanitize_for_log(&e.to_string()),
                tier = %tier,
                "Video transcription failed"
            );
            service_error_response(&e)
        }
    }
}
