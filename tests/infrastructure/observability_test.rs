use axum::http::Request;
use tower_http::request_id::MakeRequestId;
use transcribe_relay::infrastructure::observability::{
    MakeRequestUuidV4, REQUEST_ID_HEADER, TracingConfig, request_id_header,
};
use transcribe_relay::presentation::Environment;
use transcribe_relay::presentation::config::LoggingSettings;

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
    assert_eq!(request_id_header().as_str(), REQUEST_ID_HEADER);
}

#[test]
fn given_request_without_id_when_making_id_then_issues_uuid() {
    let request = Request::builder().uri("/health").body(()).unwrap();

    let id = MakeRequestUuidV4
        .make_request_id(&request)
        .expect("a request id");
    let value = id.header_value().to_str().unwrap();

    assert_eq!(value.len(), 36);
    assert_eq!(value.matches('-').count(), 4);
}

#[test]
fn given_logging_settings_when_building_tracing_config_then_directives_use_level() {
    let logging = LoggingSettings {
        level: "debug".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from_settings(&logging, Environment::Prod);

    assert!(config.json_format);
    assert_eq!(config.environment, Environment::Prod);
    assert_eq!(
        config.default_directives,
        "debug,transcribe_relay=debug,tower_http=debug"
    );
}
