use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use transcribe_relay::application::ports::{InferenceError, PredictInput};
use transcribe_relay::application::services::{
    AUDIO_ENDPOINT, TASK_MODE, TranscriptionService, TranscriptionServiceError, VIDEO_URL_ENDPOINT,
};
use transcribe_relay::domain::{AudioUpload, ModelTier, SpaceCatalog, SpaceId};
use transcribe_relay::infrastructure::credentials::StaticCredentialProvider;
use transcribe_relay::infrastructure::inference::MockInferenceClient;

fn service(
    client: Arc<MockInferenceClient>,
    credentials: StaticCredentialProvider,
    timeout: Duration,
) -> TranscriptionService {
    TranscriptionService::new(
        client,
        Arc::new(credentials),
        SpaceCatalog::new(SpaceId::new("test/standard"), SpaceId::new("test/turbo")),
        timeout,
    )
}

fn audio() -> AudioUpload {
    AudioUpload::new(b"OggS".to_vec(), "note.ogg", Some("audio/ogg".to_string()))
}

#[test]
fn given_fixed_arguments_when_inspected_then_match_remote_contract() {
    assert_eq!(AUDIO_ENDPOINT, "/predict");
    assert_eq!(VIDEO_URL_ENDPOINT, "/predict_2");
    assert_eq!(TASK_MODE, "transcribe");
}

#[test]
fn given_missing_token_when_checking_credential_then_returns_missing_credential() {
    let client = Arc::new(MockInferenceClient::returning(vec![]));
    let service = service(client, StaticCredentialProvider::missing(), Duration::from_secs(1));

    let result = service.credential();

    assert!(matches!(result, Err(TranscriptionServiceError::MissingCredential)));
}

#[test]
fn given_empty_token_when_checking_credential_then_returns_missing_credential() {
    let client = Arc::new(MockInferenceClient::returning(vec![]));
    let service = service(
        client,
        StaticCredentialProvider::with_token(""),
        Duration::from_secs(1),
    );

    assert!(service.credential().is_err());
}

#[test]
fn given_credential_when_debug_printed_then_value_is_redacted() {
    let client = Arc::new(MockInferenceClient::returning(vec![]));
    let service = service(
        client,
        StaticCredentialProvider::with_token("hf_secret"),
        Duration::from_secs(1),
    );

    let credential = service.credential().unwrap();

    assert!(!format!("{:?}", credential).contains("hf_secret"));
}

#[test]
fn given_tiers_when_resolving_spaces_then_uses_catalog() {
    let client = Arc::new(MockInferenceClient::returning(vec![]));
    let service = service(client, StaticCredentialProvider::missing(), Duration::from_secs(1));

    assert_eq!(service.space_for(ModelTier::Standard).as_str(), "test/standard");
    assert_eq!(service.space_for(ModelTier::Turbo).as_str(), "test/turbo");
}

#[tokio::test]
async fn given_audio_when_transcribing_then_sends_file_then_task_mode() {
    let client = Arc::new(MockInferenceClient::returning(vec![json!("hi there")]));
    let service = service(
        client.clone(),
        StaticCredentialProvider::with_token("hf_token"),
        Duration::from_secs(1),
    );
    let credential = service.credential().unwrap();

    let transcript = service
        .transcribe_audio(&credential, audio(), ModelTier::Turbo)
        .await
        .unwrap();

    assert_eq!(transcript.transcription, "hi there");
    let predictions = client.predictions();
    assert_eq!(predictions[0].space, SpaceId::new("test/turbo"));
    assert_eq!(predictions[0].endpoint, AUDIO_ENDPOINT);
    assert_eq!(
        predictions[0].inputs,
        vec![
            PredictInput::File(audio()),
            PredictInput::Text(TASK_MODE.to_string())
        ]
    );
}

#[tokio::test]
async fn given_url_when_transcribing_then_returns_html_and_transcript() {
    let client = Arc::new(MockInferenceClient::returning(vec![
        json!("<iframe></iframe>"),
        json!("spoken words"),
    ]));
    let service = service(
        client.clone(),
        StaticCredentialProvider::with_token("hf_token"),
        Duration::from_secs(1),
    );
    let credential = service.credential().unwrap();

    let transcript = service
        .transcribe_video_url(&credential, "https://youtu.be/xyz", ModelTier::Standard)
        .await
        .unwrap();

    assert_eq!(transcript.html, "<iframe></iframe>");
    assert_eq!(transcript.transcription, "spoken words");
    assert_eq!(client.connected_spaces(), vec![SpaceId::new("test/standard")]);
}

#[tokio::test]
async fn given_malformed_output_when_transcribing_then_returns_shape_error() {
    let client = Arc::new(MockInferenceClient::returning(vec![json!(false)]));
    let service = service(
        client,
        StaticCredentialProvider::with_token("hf_token"),
        Duration::from_secs(1),
    );
    let credential = service.credential().unwrap();

    let result = service
        .transcribe_audio(&credential, audio(), ModelTier::Standard)
        .await;

    assert!(matches!(result, Err(TranscriptionServiceError::Shape(_))));
}

#[tokio::test]
async fn given_remote_slower_than_timeout_when_transcribing_then_returns_timed_out() {
    let client = Arc::new(
        MockInferenceClient::returning(vec![json!("late")]).with_delay(Duration::from_secs(5)),
    );
    let service = service(
        client.clone(),
        StaticCredentialProvider::with_token("hf_token"),
        Duration::from_millis(20),
    );
    let credential = service.credential().unwrap();

    let result = service
        .transcribe_audio(&credential, audio(), ModelTier::Standard)
        .await;

    assert!(matches!(
        result,
        Err(TranscriptionServiceError::Inference(InferenceError::TimedOut(_)))
    ));
    assert_eq!(client.predictions().len(), 1);
}
