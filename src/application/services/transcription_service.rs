use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{
    CredentialProvider, InferenceClient, InferenceError, PredictInput,
};
use crate::domain::{
    AudioTranscript, AudioUpload, ModelTier, PredictionShapeError, SpaceCatalog, SpaceId,
    VideoTranscript,
};

pub const AUDIO_ENDPOINT: &str = "/predict";
pub const VIDEO_URL_ENDPOINT: &str = "/predict_2";
pub const TASK_MODE: &str = "transcribe";

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionServiceError {
    #[error("Hugging Face token not found")]
    MissingCredential,
    #[error(transparent)]
    Inference(#[from] InferenceError),
    #[error(transparent)]
    Shape(#[from] PredictionShapeError),
}

/// Credential checked out for one request.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

pub struct TranscriptionService {
    client: Arc<dyn InferenceClient>,
    credentials: Arc<dyn CredentialProvider>,
    spaces: SpaceCatalog,
    timeout: Duration,
}

impl TranscriptionService {
    pub fn new(
        client: Arc<dyn InferenceClient>,
        credentials: Arc<dyn CredentialProvider>,
        spaces: SpaceCatalog,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            credentials,
            spaces,
            timeout,
        }
    }

    /// Reads the credential for this request. Empty values count as missing.
    pub fn credential(&self) -> Result<Credential, TranscriptionServiceError> {
        self.credentials
            .token()
            .filter(|token| !token.trim().is_empty())
            .map(Credential)
            .ok_or(TranscriptionServiceError::MissingCredential)
    }

    pub fn space_for(&self, tier: ModelTier) -> &SpaceId {
        self.spaces.resolve(tier)
    }

    #[tracing::instrument(skip(self, credential, audio), fields(bytes = audio.len()))]
    pub async fn transcribe_audio(
        &self,
        credential: &Credential,
        audio: AudioUpload,
        tier: ModelTier,
    ) -> Result<AudioTranscript, TranscriptionServiceError> {
        let inputs = vec![
            PredictInput::File(audio),
            PredictInput::Text(TASK_MODE.to_string()),
        ];
        let data = self
            .predict(credential, tier, AUDIO_ENDPOINT, inputs)
            .await?;

        Ok(AudioTranscript::from_prediction(data)?)
    }

    #[tracing::instrument(skip(self, credential, url))]
    pub async fn transcribe_video_url(
        &self,
        credential: &Credential,
        url: &str,
        tier: ModelTier,
    ) -> Result<VideoTranscript, TranscriptionServiceError> {
        let inputs = vec![
            PredictInput::Text(url.to_string()),
            PredictInput::Text(TASK_MODE.to_string()),
        ];
        let data = self
            .predict(credential, tier, VIDEO_URL_ENDPOINT, inputs)
            .await?;

        Ok(VideoTranscript::from_prediction(data)?)
    }

    async fn predict(
        &self,
        credential: &Credential,
        tier: ModelTier,
        endpoint: &str,
        inputs: Vec<PredictInput>,
    ) -> Result<Vec<serde_json::Value>, InferenceError> {
        let space = self.spaces.resolve(tier);
        tracing::debug!(space = %space, tier = %tier, endpoint, "Calling remote inference");

        let data = self
            .bounded(async {
                let session = self.client.connect(space, credential.as_str()).await?;
                session.predict(endpoint, inputs).await
            })
            .await?;

        tracing::info!(
            space = %space,
            endpoint,
            elements = data.len(),
            "Remote inference completed"
        );

        Ok(data)
    }

    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, InferenceError>>,
    ) -> Result<T, InferenceError> {
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| InferenceError::TimedOut(self.timeout.as_secs()))?
    }
}
