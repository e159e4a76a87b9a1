//! Client-side helper for the transcription endpoints.

mod transcribe_client;

use std::path::Path;

pub use transcribe_client::{
    AUDIO_TRANSCRIBE_PATH, DEFAULT_CLIENT_TIMEOUT, TranscribeClient, YOUTUBE_TRANSCRIBE_PATH,
};

/// Best-effort MIME type for an audio file, from its extension.
pub fn audio_mime_type(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match extension.as_str() {
        "wav" => "audio/wav",
        "mp3" => "audio/mpeg",
        "m4a" | "mp4" => "audio/mp4",
        "ogg" | "oga" => "audio/ogg",
        "opus" => "audio/opus",
        "webm" => "audio/webm",
        "flac" => "audio/flac",
        "aac" => "audio/aac",
        _ => return None,
    };
    Some(mime)
}
