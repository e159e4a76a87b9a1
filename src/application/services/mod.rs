mod transcription_service;

pub use transcription_service::{
    AUDIO_ENDPOINT, Credential, TASK_MODE, TranscriptionService, TranscriptionServiceError,
    VIDEO_URL_ENDPOINT,
};
