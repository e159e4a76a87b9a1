use std::error::Error;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::services::TranscriptionServiceError;
use crate::domain::{ErrorReport, PredictionShapeError};

pub const TRANSCRIPTION_FAILED: &str = "Transcription failed";
pub const NO_AUDIO_PROVIDED: &str = "No audio file provided";
pub const NO_YOUTUBE_URL_PROVIDED: &str = "No YouTube URL provided";

pub fn error_response(status: StatusCode, report: ErrorReport) -> Response {
    (status, Json(report)).into_response()
}

pub fn bad_request(message: &str) -> Response {
    error_response(StatusCode::BAD_REQUEST, ErrorReport::new(message))
}

/// 500 with `{ error: "Transcription failed", details }` for any caught
/// failure.
pub fn request_failed(err: &(dyn Error + 'static)) -> Response {
    request_failed_with(StatusCode::INTERNAL_SERVER_ERROR, err)
}

pub fn request_failed_with(status: StatusCode, err: &(dyn Error + 'static)) -> Response {
    error_response(status, ErrorReport::from_error(TRANSCRIPTION_FAILED, err))
}

pub fn service_error_response(err: &TranscriptionServiceError) -> Response {
    match err {
        TranscriptionServiceError::MissingCredential => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorReport::new(err.to_string()),
        ),
        TranscriptionServiceError::Shape(shape) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, shape_report(shape))
        }
        TranscriptionServiceError::Inference(inference) => request_failed(inference),
    }
}

fn shape_report(shape: &PredictionShapeError) -> ErrorReport {
    match shape {
        PredictionShapeError::InvalidResult { expected, actual } => ErrorReport::with_details(
            shape.to_string(),
            format!("expected {} output element(s), got {}", expected, actual),
        ),
        _ => ErrorReport::new(shape.to_string()),
    }
}
