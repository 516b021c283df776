//! Shared response envelope types for API handlers.
//!
//! The reporting endpoints answer with a handful of fixed shapes that the
//! dashboard consumes. Use these instead of ad-hoc `serde_json::json!`.

use serde::Serialize;

/// Message returned when there are no analyses to rank.
pub const NO_SENTIMENTS_MESSAGE: &str = "Não há sentimentos registrados ainda.";

/// `{ "sentimento": T }` envelope used by the aggregate endpoints.
#[derive(Debug, Serialize)]
pub struct SentimentEnvelope<T: Serialize> {
    pub sentimento: T,
}

/// `{ "message": ... }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{ "quantidade": n }` total count.
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub quantidade: i64,
}

/// Most frequent label, or a message when the table is empty.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MostFrequentResponse {
    Found {
        sentimento_predominante: String,
        quantidade: i64,
    },
    Empty(MessageResponse),
}

impl MostFrequentResponse {
    pub fn empty() -> Self {
        MostFrequentResponse::Empty(MessageResponse::new(NO_SENTIMENTS_MESSAGE))
    }
}
