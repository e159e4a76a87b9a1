use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{AudioUpload, SpaceId};

/// One positional argument of a remote prediction call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictInput {
    Text(String),
    File(AudioUpload),
}

/// Opens sessions against hosted inference apps.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn connect(
        &self,
        space: &SpaceId,
        token: &str,
    ) -> Result<Box<dyn InferenceSession>, InferenceError>;
}

/// A session bound to one Space. Lives for a single request.
#[async_trait]
pub trait InferenceSession: Send + Sync {
    /// Calls a named endpoint (e.g. `/predict`) and returns the raw output
    /// data array.
    async fn predict(
        &self,
        endpoint: &str,
        inputs: Vec<PredictInput>,
    ) -> Result<Vec<Value>, InferenceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("could not resolve space {space}: {reason}")]
    SpaceResolutionFailed { space: String, reason: String },
    #[error("connection to {space} failed: {reason}")]
    ConnectionFailed { space: String, reason: String },
    #[error("file upload failed: {0}")]
    UploadFailed(String),
    #[error("prediction failed: {0}")]
    PredictionFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("remote call timed out after {0} seconds")]
    TimedOut(u64),
}
