use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use transcribe_relay::application::services::TranscriptionService;
use transcribe_relay::infrastructure::credentials::EnvCredentialProvider;
use transcribe_relay::infrastructure::inference::GradioClient;
use transcribe_relay::infrastructure::observability::{TracingConfig, init_tracing};
use transcribe_relay::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().context("Failed to resolve environment")?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(&settings.logging, environment));

    let inference = &settings.inference;
    let client = GradioClient::new(inference.hub_base_url.clone(), inference.connect_timeout())
        .context("Failed to build inference client")?;
    let credentials = EnvCredentialProvider::new(inference.token_env_var.clone());

    if std::env::var(credentials.var_name()).is_err() {
        tracing::warn!(
            var = credentials.var_name(),
            "Remote credential is not set; transcription requests will fail until it is"
        );
    }

    let transcription_service = Arc::new(TranscriptionService::new(
        Arc::new(client),
        Arc::new(credentials),
        inference.space_catalog(),
        inference.request_timeout(),
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server host or port")?;

    tracing::info!(
        standard_space = %inference.standard_space,
        turbo_space = %inference.turbo_space,
        timeout_secs = inference.request_timeout_secs,
        "Inference configured"
    );

    let state = AppState {
        transcription_service,
        settings: Arc::new(settings),
    };
    let router = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
