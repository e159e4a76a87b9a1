mod credential_provider;
mod inference_client;

pub use credential_provider::CredentialProvider;
pub use inference_client::{InferenceClient, InferenceError, InferenceSession, PredictInput};
