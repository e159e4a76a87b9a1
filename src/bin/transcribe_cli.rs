use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use transcribe_relay::client::{TranscribeClient, audio_mime_type};
use transcribe_relay::domain::AudioUpload;

#[derive(Parser)]
#[command(name = "transcribe-cli", version, about = "Submit audio or video URLs for transcription")]
struct Cli {
    /// Base URL of the transcription server.
    #[arg(long, default_value = "http://localhost:3000")]
    server: String,

    /// Model tier: "standard" or "turbo".
    #[arg(long, default_value = "standard")]
    model: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transcribe a local audio file.
    Audio { path: PathBuf },
    /// Transcribe the audio track of a YouTube video.
    Youtube { url: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = TranscribeClient::new(cli.server.clone()).context("Failed to build HTTP client")?;

    let result = match cli.command {
        Command::Audio { path } => {
            let data = tokio::fs::read(&path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("audio")
                .to_string();
            let mime_type = audio_mime_type(&path).map(str::to_string);

            client
                .transcribe_audio_file(AudioUpload::new(data, file_name, mime_type), &cli.model)
                .await
        }
        Command::Youtube { url } => client.transcribe_youtube_url(&url, &cli.model).await,
    };

    println!("{}", serde_json::to_string_pretty(&result)?);

    if !result.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
