mod form;
mod health;
mod responses;
mod transcribe;
mod transcribe_yt;

pub use form::TranscribeForm;
pub use health::health_handler;
pub use responses::{NO_AUDIO_PROVIDED, NO_YOUTUBE_URL_PROVIDED, TRANSCRIPTION_FAILED};
pub use transcribe::{TranscribeResponse, transcribe_handler};
pub use transcribe_yt::{TranscribeYoutubeResponse, transcribe_yt_handler};
