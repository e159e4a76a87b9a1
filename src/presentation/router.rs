use axum::Router;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::{MakeRequestUuidV4, request_id_header, request_span};
use crate::presentation::handlers::{health_handler, transcribe_handler, transcribe_yt_handler};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(request_span::<Body>)
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let request_tracing = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(request_id_header(), MakeRequestUuidV4))
        .layer(PropagateRequestIdLayer::new(request_id_header()))
        .layer(trace_layer);

    let body_limit = DefaultBodyLimit::max(state.settings.server.max_upload_size_bytes);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/transcribe", post(transcribe_handler))
        .route("/api/transcribe-yt", post(transcribe_yt_handler))
        .layer(body_limit)
        .layer(request_tracing)
        .layer(cors)
        .with_state(state)
}
