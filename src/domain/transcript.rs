use serde_json::Value;

/// The remote output did not have the arity or element types expected for
/// the endpoint that produced it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredictionShapeError {
    #[error("result is invalid")]
    InvalidResult { expected: usize, actual: usize },
    #[error("transcription is not a string")]
    TranscriptionNotString,
    #[error("html or transcription is not a string")]
    HtmlOrTranscriptionNotString,
}

/// Output of the audio endpoint: exactly one text element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioTranscript {
    pub transcription: String,
}

impl AudioTranscript {
    pub fn from_prediction(data: Vec<Value>) -> Result<Self, PredictionShapeError> {
        let [transcription] = exact_arity::<1>(data)?;
        match transcription {
            Value::String(transcription) => Ok(Self { transcription }),
            _ => Err(PredictionShapeError::TranscriptionNotString),
        }
    }
}

/// Output of the video URL endpoint: an HTML fragment followed by the
/// transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoTranscript {
    pub html: String,
    pub transcription: String,
}

impl VideoTranscript {
    pub fn from_prediction(data: Vec<Value>) -> Result<Self, PredictionShapeError> {
        let [html, transcription] = exact_arity::<2>(data)?;
        match (html, transcription) {
            (Value::String(html), Value::String(transcription)) => Ok(Self {
                html,
                transcription,
            }),
            _ => Err(PredictionShapeError::HtmlOrTranscriptionNotString),
        }
    }
}

fn exact_arity<const N: usize>(data: Vec<Value>) -> Result<[Value; N], PredictionShapeError> {
    let actual = data.len();
    data.try_into()
        .map_err(|_| PredictionShapeError::InvalidResult {
            expected: N,
            actual,
        })
}
