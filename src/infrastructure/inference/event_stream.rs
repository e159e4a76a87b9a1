use serde_json::Value;

use crate::application::ports::InferenceError;

const COMPLETE_EVENT: &str = "complete";
const ERROR_EVENT: &str = "error";

/// One server-sent event from a Gradio result stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEvent {
    pub event: String,
    pub data: String,
}

/// Splits a buffered `text/event-stream` body into events. Multi-line `data`
/// fields are joined with `\n`; comment lines are skipped.
pub fn parse_event_stream(body: &str) -> Vec<ServerEvent> {
    let mut events = Vec::new();
    let mut event = String::new();
    let mut data: Vec<&str> = Vec::new();

    for line in body.lines() {
        if line.is_empty() {
            flush(&mut events, &mut event, &mut data);
            continue;
        }
        if line.starts_with(':') {
            continue;
        }
        if let Some(value) = field_value(line, "event") {
            event = value.to_string();
        } else if let Some(value) = field_value(line, "data") {
            data.push(value);
        }
    }
    flush(&mut events, &mut event, &mut data);

    events
}

/// Picks the terminal event out of a result stream: `complete` yields the
/// output array, `error` fails the prediction.
pub fn resolve_prediction(events: &[ServerEvent]) -> Result<Vec<Value>, InferenceError> {
    for event in events {
        match event.event.as_str() {
            COMPLETE_EVENT => {
                return serde_json::from_str::<Vec<Value>>(&event.data).map_err(|e| {
                    InferenceError::InvalidResponse(format!("complete event data: {}", e))
                });
            }
            ERROR_EVENT => {
                return Err(InferenceError::PredictionFailed(error_message(
                    &event.data,
                )));
            }
            other => tracing::trace!(event = other, "Skipping intermediate event"),
        }
    }

    Err(InferenceError::InvalidResponse(
        "event stream ended without a result".to_string(),
    ))
}

fn field_value<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(name)?.strip_prefix(':')?;
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}

fn flush(events: &mut Vec<ServerEvent>, event: &mut String, data: &mut Vec<&str>) {
    if event.is_empty() && data.is_empty() {
        return;
    }
    let name = if event.is_empty() {
        "message".to_string()
    } else {
        std::mem::take(event)
    };
    events.push(ServerEvent {
        event: name,
        data: data.join("\n"),
    });
    data.clear();
}

fn error_message(data: &str) -> String {
    match serde_json::from_str::<Value>(data) {
        Ok(Value::String(message)) if !message.is_empty() => message,
        Ok(Value::Null) => "remote app reported an error".to_string(),
        Ok(Value::Object(map)) => map
            .get("message")
            .or_else(|| map.get("error"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| data.to_string()),
        _ if data.trim().is_empty() => "remote app reported an error".to_string(),
        _ => data.to_string(),
    }
}
