//! RabbitMQ transport.
//!
//! Each publish opens a connection, declares the durable direct exchange
//! (idempotent on the broker), enables publisher confirms, publishes, waits
//! for the ack and closes the connection again. The connection is closed
//! on every path, including failures part-way through.

use async_trait::async_trait;
use lapin::options::{BasicPublishOptions, ConfirmSelectOptions, ExchangeDeclareOptions};
use lapin::types::FieldTable;
use lapin::{Connection, ConnectionProperties, ExchangeKind};

use crate::config::BrokerConfig;
use crate::message::OutboundMessage;
use crate::publisher::{AnalysisPublisher, PublishError};

/// AMQP reply code for a normal close.
const REPLY_SUCCESS: u16 = 200;

pub struct AmqpPublisher {
    config: BrokerConfig,
}

impl AmqpPublisher {
    pub fn new(config: BrokerConfig) -> Self {
        Self { config }
    }

    async fn publish_on(
        connection: &Connection,
        message: &OutboundMessage,
    ) -> Result<(), PublishError> {
        let channel = connection.create_channel().await?;
        channel
            .confirm_select(ConfirmSelectOptions::default())
            .await?;

        channel
            .exchange_declare(
                &message.exchange,
                ExchangeKind::Direct,
                ExchangeDeclareOptions {
                    durable: true,
                    ..ExchangeDeclareOptions::default()
                },
                FieldTable::default(),
            )
            .await?;

        let confirmation = channel
            .basic_publish(
                &message.exchange,
                &message.routing_key,
                BasicPublishOptions::default(),
                &message.payload,
                message.properties(),
            )
            .await?
            .await?;

        if confirmation.is_nack() {
            return Err(PublishError::Rejected {
                exchange: message.exchange.clone(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl AnalysisPublisher for AmqpPublisher {
    async fn publish(&self, message: &OutboundMessage) -> Result<(), PublishError> {
        let connection =
            Connection::connect_uri(self.config.amqp_uri(), ConnectionProperties::default())
                .await?;

        let result = Self::publish_on(&connection, message).await;

        if let Err(e) = connection.close(REPLY_SUCCESS, "OK").await {
            tracing::warn!(error = %e, "Failed to close broker connection cleanly");
        }

        if let Err(e) = &result {
            tracing::error!(
                error = %e,
                host = %self.config.host,
                exchange = %message.exchange,
                "Analysis publish failed"
            );
        }
        result
    }
}
