use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use transcribe_relay::application::services::TranscriptionService;
use transcribe_relay::infrastructure::credentials::StaticCredentialProvider;
use transcribe_relay::infrastructure::inference::MockInferenceClient;
use transcribe_relay::presentation::{AppState, Settings, create_router};

pub const TEST_TOKEN: &str = "hf_test_token";
pub const BOUNDARY: &str = "transcribe-relay-test-boundary";
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

pub enum FormPart {
    Text {
        name: &'static str,
        value: &'static str,
    },
    File {
        name: &'static str,
        file_name: &'static str,
        content_type: &'static str,
        data: &'static [u8],
    },
}

impl FormPart {
    pub fn text(name: &'static str, value: &'static str) -> Self {
        FormPart::Text { name, value }
    }

    pub fn file(
        name: &'static str,
        file_name: &'static str,
        content_type: &'static str,
        data: &'static [u8],
    ) -> Self {
        FormPart::File {
            name,
            file_name,
            content_type,
            data,
        }
    }
}

pub fn multipart_body(parts: &[FormPart]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            FormPart::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                        .as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            FormPart::File {
                name,
                file_name,
                content_type,
                data,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                        name, file_name
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(
                    format!("Content-Type: {}\r\n\r\n", content_type).as_bytes(),
                );
                body.extend_from_slice(data);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn multipart_request(uri: &str, parts: &[FormPart]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

pub async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn create_app(
    client: Arc<MockInferenceClient>,
    credentials: StaticCredentialProvider,
) -> axum::Router {
    create_app_with_timeout(client, credentials, TEST_TIMEOUT)
}

pub fn create_app_with_timeout(
    client: Arc<MockInferenceClient>,
    credentials: StaticCredentialProvider,
    timeout: Duration,
) -> axum::Router {
    create_app_with_settings(client, credentials, Settings::defaults().unwrap(), timeout)
}

pub fn create_app_with_settings(
    client: Arc<MockInferenceClient>,
    credentials: StaticCredentialProvider,
    settings: Settings,
    timeout: Duration,
) -> axum::Router {
    let transcription_service = Arc::new(TranscriptionService::new(
        client,
        Arc::new(credentials),
        settings.inference.space_catalog(),
        timeout,
    ));

    create_router(AppState {
        transcription_service,
        settings: Arc::new(settings),
    })
}

/// Serves `app` on an ephemeral local port until the returned sender fires.
pub async fn serve(app: axum::Router) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (format!("http://{}", addr), shutdown_tx)
}
