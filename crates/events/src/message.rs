//! The message placed on the analysis exchange.

use lapin::BasicProperties;

use crate::publisher::PublishError;

/// AMQP delivery mode that asks the broker to write the message to disk.
pub const PERSISTENT_DELIVERY_MODE: u8 = 2;

const CONTENT_TYPE: &str = "application/json";

/// A fully-addressed message ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub exchange: String,
    pub routing_key: String,
    pub payload: Vec<u8>,
    pub delivery_mode: u8,
}

impl OutboundMessage {
    /// Build the analysis request for one action description.
    ///
    /// The payload is the description encoded as a JSON string, which is
    /// what the pipeline's consumer decodes.
    pub fn analysis_request(
        exchange: &str,
        routing_key: &str,
        description: &str,
    ) -> Result<Self, PublishError> {
        Ok(Self {
            exchange: exchange.to_string(),
            routing_key: routing_key.to_string(),
            payload: serde_json::to_vec(description)?,
            delivery_mode: PERSISTENT_DELIVERY_MODE,
        })
    }

    pub fn is_persistent(&self) -> bool {
        self.delivery_mode == PERSISTENT_DELIVERY_MODE
    }

    /// Decode the payload back into the description text.
    pub fn description(&self) -> Result<String, PublishError> {
        Ok(serde_json::from_slice(&self.payload)?)
    }

    pub fn properties(&self) -> BasicProperties {
        BasicProperties::default()
            .with_content_type(CONTENT_TYPE.into())
            .with_delivery_mode(self.delivery_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_is_json_string() {
        let message =
            OutboundMessage::analysis_request("ex", "rk", "cliente \"muito\" insatisfeito").unwrap();

        assert_eq!(message.payload, br#""cliente \"muito\" insatisfeito""#.to_vec());
        assert_eq!(message.description().unwrap(), "cliente \"muito\" insatisfeito");
    }

    #[test]
    fn test_properties_are_persistent_json() {
        let message = OutboundMessage::analysis_request("ex", "rk", "ok").unwrap();
        let props = message.properties();

        assert!(message.is_persistent());
        assert_eq!(props.delivery_mode(), &Some(PERSISTENT_DELIVERY_MODE));
        assert_eq!(
            props.content_type().as_ref().map(|ct| ct.as_str()),
            Some("application/json")
        );
    }
}
