//! Publish gateway: hands action descriptions to the external sentiment
//! pipeline over a durable AMQP exchange.
//!
//! - [`PublishGateway`] -- turns a description into an [`OutboundMessage`]
//!   and hands it to a transport.
//! - [`AnalysisPublisher`] -- the transport seam.
//! - [`AmqpPublisher`] -- RabbitMQ transport (one connection per publish).
//! - [`RecordingPublisher`] -- in-memory transport for tests and local runs
//!   without a broker.
//!
//! The HTTP request never waits for a sentiment result; a successful
//! publish only means the broker confirmed the message.

pub mod amqp;
pub mod config;
pub mod memory;
pub mod message;
pub mod publisher;

pub use amqp::AmqpPublisher;
pub use config::BrokerConfig;
pub use memory::RecordingPublisher;
pub use message::OutboundMessage;
pub use publisher::{AnalysisPublisher, PublishError, PublishGateway};
