//! In-memory transport that records every message instead of sending it.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::message::OutboundMessage;
use crate::publisher::{AnalysisPublisher, PublishError};

/// Collects published messages in order. Optionally refuses every publish.
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    messages: Mutex<Vec<OutboundMessage>>,
    failure: Option<String>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder that fails every publish with [`PublishError::Unavailable`].
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            messages: Mutex::default(),
            failure: Some(reason.into()),
        }
    }

    /// Snapshot of everything published so far.
    pub async fn messages(&self) -> Vec<OutboundMessage> {
        self.messages.lock().await.clone()
    }
}

#[async_trait]
impl AnalysisPublisher for RecordingPublisher {
    async fn publish(&self, message: &OutboundMessage) -> Result<(), PublishError> {
        if let Some(reason) = &self.failure {
            return Err(PublishError::Unavailable(reason.clone()));
        }
        self.messages.lock().await.push(message.clone());
        Ok(())
    }
}
