use std::error::Error;

use serde::{Deserialize, Serialize};

pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Uniform `{ error, details? }` envelope returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorReport {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }

    /// Builds a report whose details are the flattened message chain of `err`.
    pub fn from_error(headline: impl Into<String>, err: &(dyn Error + 'static)) -> Self {
        Self::with_details(headline, describe_error(err))
    }
}

/// Flattens an error and its `source()` chain into one human-readable line.
///
/// Causes whose text is already part of the message are skipped, since many
/// error types embed their source in their own `Display` output.
pub fn describe_error(err: &(dyn Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            if !message.is_empty() {
                message.push_str(": ");
            }
            message.push_str(&text);
        }
        source = cause.source();
    }

    if message.trim().is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        message
    }
}
