mod audio_upload;
mod error_report;
mod model_tier;
mod space_id;
mod transcribe_result;
mod transcript;

pub use audio_upload::AudioUpload;
pub use error_report::{ErrorReport, UNKNOWN_ERROR, describe_error};
pub use model_tier::ModelTier;
pub use space_id::{DEFAULT_STANDARD_SPACE, DEFAULT_TURBO_SPACE, SpaceCatalog, SpaceId};
pub use transcribe_result::TranscribeResult;
pub use transcript::{AudioTranscript, PredictionShapeError, VideoTranscript};
