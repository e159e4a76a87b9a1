use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use crate::application::ports::{InferenceClient, InferenceError, InferenceSession, PredictInput};
use crate::domain::SpaceId;

#[derive(Debug, Clone)]
enum MockOutcome {
    Data(Vec<Value>),
    ConnectFails(String),
    PredictFails(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedPrediction {
    pub space: SpaceId,
    pub endpoint: String,
    pub inputs: Vec<PredictInput>,
}

/// In-memory inference client that records every connection and prediction.
pub struct MockInferenceClient {
    outcome: MockOutcome,
    delay: Option<Duration>,
    connections: Mutex<Vec<(SpaceId, String)>>,
    predictions: Arc<Mutex<Vec<RecordedPrediction>>>,
}

impl MockInferenceClient {
    fn with_outcome(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            delay: None,
            connections: Mutex::new(Vec::new()),
            predictions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn returning(data: Vec<Value>) -> Self {
        Self::with_outcome(MockOutcome::Data(data))
    }

    pub fn failing_to_connect(reason: impl Into<String>) -> Self {
        Self::with_outcome(MockOutcome::ConnectFails(reason.into()))
    }

    pub fn failing_prediction(reason: impl Into<String>) -> Self {
        Self::with_outcome(MockOutcome::PredictFails(reason.into()))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn connect_count(&self) -> usize {
        self.connections.lock().len()
    }

    pub fn connected_spaces(&self) -> Vec<SpaceId> {
        self.connections
            .lock()
            .iter()
            .map(|(space, _)| space.clone())
            .collect()
    }

    pub fn tokens_used(&self) -> Vec<String> {
        self.connections
            .lock()
            .iter()
            .map(|(_, token)| token.clone())
            .collect()
    }

    pub fn predictions(&self) -> Vec<RecordedPrediction> {
        self.predictions.lock().clone()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn connect(
        &self,
        space: &SpaceId,
        token: &str,
    ) -> Result<Box<dyn InferenceSession>, InferenceError> {
        self.connections
            .lock()
            .push((space.clone(), token.to_string()));

        if let MockOutcome::ConnectFails(reason) = &self.outcome {
            return Err(InferenceError::ConnectionFailed {
                space: space.to_string(),
                reason: reason.clone(),
            });
        }

        Ok(Box::new(MockInferenceSession {
            space: space.clone(),
            outcome: self.outcome.clone(),
            delay: self.delay,
            predictions: Arc::clone(&self.predictions),
        }))
    }
}

struct MockInferenceSession {
    space: SpaceId,
    outcome: MockOutcome,
    delay: Option<Duration>,
    predictions: Arc<Mutex<Vec<RecordedPrediction>>>,
}

#[async_trait]
impl InferenceSession for MockInferenceSession {
    async fn predict(
        &self,
        endpoint: &str,
        inputs: Vec<PredictInput>,
    ) -> Result<Vec<Value>, InferenceError> {
        self.predictions.lock().push(RecordedPrediction {
            space: self.space.clone(),
            endpoint: endpoint.to_string(),
            inputs,
        });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.outcome {
            MockOutcome::Data(data) => Ok(data.clone()),
            MockOutcome::PredictFails(reason) => {
                Err(InferenceError::PredictionFailed(reason.clone()))
            }
            MockOutcome::ConnectFails(reason) => Err(InferenceError::ConnectionFailed {
                space: self.space.to_string(),
                reason: reason.clone(),
            }),
        }
    }
}
