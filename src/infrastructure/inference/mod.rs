mod event_stream;
mod gradio_client;
mod gradio_session;
mod mock_inference_client;

pub use event_stream::{ServerEvent, parse_event_stream, resolve_prediction};
pub use gradio_client::{DEFAULT_HUB_BASE_URL, GradioClient};
pub use gradio_session::GradioSession;
pub use mock_inference_client::{MockInferenceClient, RecordedPrediction};
