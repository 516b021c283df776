//! Transport seam and the gateway the API calls.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::BrokerConfig;
use crate::message::OutboundMessage;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for publish failures. None of these are retried.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// Connection, channel or protocol failure talking to the broker.
    #[error("AMQP error: {0}")]
    Amqp(#[from] lapin::Error),

    /// The broker answered the publish with a negative acknowledgement.
    #[error("Broker rejected message for exchange '{exchange}'")]
    Rejected { exchange: String },

    /// The payload could not be encoded or decoded.
    #[error("Payload encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The transport is not accepting messages.
    #[error("Publisher unavailable: {0}")]
    Unavailable(String),
}

// ---------------------------------------------------------------------------
// Transport trait
// ---------------------------------------------------------------------------

/// Delivers one message to the broker and waits for its acknowledgement.
#[async_trait]
pub trait AnalysisPublisher: Send + Sync {
    async fn publish(&self, message: &OutboundMessage) -> Result<(), PublishError>;
}

// ---------------------------------------------------------------------------
// PublishGateway
// ---------------------------------------------------------------------------

/// Addresses analysis requests to the configured exchange and routing key.
///
/// Cheap to clone; share it through application state.
#[derive(Clone)]
pub struct PublishGateway {
    publisher: Arc<dyn AnalysisPublisher>,
    exchange: String,
    routing_key: String,
}

impl PublishGateway {
    pub fn new(publisher: Arc<dyn AnalysisPublisher>, config: &BrokerConfig) -> Self {
        Self {
            publisher,
            exchange: config.exchange.clone(),
            routing_key: config.routing_key.clone(),
        }
    }

    /// Queue `description` for sentiment scoring.
    ///
    /// Returns once the broker has confirmed the message. No retry and no
    /// outbox: a failure here is reported to the caller and the message is lost.
    pub async fn request_analysis(&self, description: &str) -> Result<(), PublishError> {
        let message =
            OutboundMessage::analysis_request(&self.exchange, &self.routing_key, description)?;

        self.publisher.publish(&message).await?;

        tracing::info!(
            exchange = %self.exchange,
            routing_key = %self.routing_key,
            bytes = message.payload.len(),
            "Analysis request published"
        );
        Ok(())
    }
}
