use serde::{Deserialize, Serialize};

use super::error_report::ErrorReport;

/// Outcome of one transcription request as seen by a client.
///
/// Serialized with an explicit `success` discriminator:
/// `{"success": true, "transcription": "..", "html": ".."}` or
/// `{"success": false, "error": "..", "details": ".."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "TranscribeResultWire", try_from = "TranscribeResultWire")]
pub enum TranscribeResult {
    Success {
        transcription: String,
        html: Option<String>,
    },
    Failure {
        error: String,
        details: Option<String>,
    },
}

impl TranscribeResult {
    pub fn success(transcription: impl Into<String>) -> Self {
        TranscribeResult::Success {
            transcription: transcription.into(),
            html: None,
        }
    }

    pub fn success_with_html(transcription: impl Into<String>, html: impl Into<String>) -> Self {
        TranscribeResult::Success {
            transcription: transcription.into(),
            html: Some(html.into()),
        }
    }

    pub fn failure(error: impl Into<String>, details: Option<String>) -> Self {
        TranscribeResult::Failure {
            error: error.into(),
            details,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TranscribeResult::Success { .. })
    }

    pub fn transcription(&self) -> Option<&str> {
        match self {
            TranscribeResult::Success { transcription, .. } => Some(transcription),
            TranscribeResult::Failure { .. } => None,
        }
    }
}

impl From<ErrorReport> for TranscribeResult {
    fn from(report: ErrorReport) -> Self {
        TranscribeResult::Failure {
            error: report.error,
            details: report.details,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct TranscribeResultWire {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    transcription: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl From<TranscribeResult> for TranscribeResultWire {
    fn from(result: TranscribeResult) -> Self {
        match result {
            TranscribeResult::Success {
                transcription,
                html,
            } => Self {
                success: true,
                transcription: Some(transcription),
                html,
                error: None,
                details: None,
            },
            TranscribeResult::Failure { error, details } => Self {
                success: false,
                transcription: None,
                html: None,
                error: Some(error),
                details,
            },
        }
    }
}

impl TryFrom<TranscribeResultWire> for TranscribeResult {
    type Error = String;

    fn try_from(wire: TranscribeResultWire) -> Result<Self, Self::Error> {
        match (wire.success, wire.transcription, wire.error) {
            (true, Some(transcription), None) => Ok(TranscribeResult::Success {
                transcription,
                html: wire.html,
            }),
            (false, None, Some(error)) => Ok(TranscribeResult::Failure {
                error,
                details: wire.details,
            }),
            (true, _, _) => Err("success result must carry only a transcription".to_string()),
            (false, _, _) => Err("failure result must carry only an error".to_string()),
        }
    }
}
