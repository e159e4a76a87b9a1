use std::path::PathBuf;
use std::process::Output;
use std::sync::Arc;

use serde_json::{Value, json};
use tokio::process::Command;

use transcribe_relay::application::ports::PredictInput;
use transcribe_relay::domain::{DEFAULT_STANDARD_SPACE, DEFAULT_TURBO_SPACE, SpaceId};
use transcribe_relay::infrastructure::credentials::StaticCredentialProvider;
use transcribe_relay::infrastructure::inference::MockInferenceClient;

use crate::support::{TEST_TOKEN, create_app, serve};

async fn run_cli(args: &[&str]) -> (Output, Value) {
    let output = Command::new(env!("CARGO_BIN_EXE_transcribe-cli"))
        .args(args)
        .output()
        .await
        .unwrap();
    let body = serde_json::from_slice(&output.stdout).unwrap();
    (output, body)
}

fn temp_audio_file(extension: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("cli-{}.{}", uuid::Uuid::new_v4(), extension));
    std::fs::write(&path, b"RIFF cli wav").unwrap();
    path
}

#[tokio::test]
async fn given_audio_subcommand_when_running_cli_then_prints_transcript_and_exits_zero() {
    let inference = Arc::new(MockInferenceClient::returning(vec![json!("from the cli")]));
    let app = create_app(
        inference.clone(),
        StaticCredentialProvider::with_token(TEST_TOKEN),
    );
    let (base_url, shutdown_tx) = serve(app).await;
    let path = temp_audio_file("WAV");

    let (output, body) = run_cli(&[
        "--server",
        &base_url,
        "--model",
        "turbo",
        "audio",
        path.to_str().unwrap(),
    ])
    .await;

    assert!(output.status.success());
    assert_eq!(body["success"], true);
    assert_eq!(body["transcription"], "from the cli");
    assert_eq!(inference.connected_spaces(), vec![SpaceId::new(DEFAULT_TURBO_SPACE)]);

    let predictions = inference.predictions();
    match &predictions[0].inputs[0] {
        PredictInput::File(audio) => {
            assert_eq!(audio.mime_type.as_deref(), Some("audio/wav"));
            assert_eq!(&audio.data[..], b"RIFF cli wav");
        }
        other => panic!("expected file input, got {:?}", other),
    }

    std::fs::remove_file(&path).ok();
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_youtube_subcommand_with_failing_space_when_running_cli_then_exits_nonzero() {
    let inference = Arc::new(MockInferenceClient::failing_prediction("Video unavailable"));
    let app = create_app(
        inference.clone(),
        StaticCredentialProvider::with_token(TEST_TOKEN),
    );
    let (base_url, shutdown_tx) = serve(app).await;

    let (output, body) = run_cli(&[
        "--server",
        &base_url,
        "youtube",
        "https://www.youtube.com/watch?v=abc",
    ])
    .await;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Transcription failed");
    assert_eq!(inference.connected_spaces(), vec![SpaceId::new(DEFAULT_STANDARD_SPACE)]);
    shutdown_tx.send(()).ok();
}
