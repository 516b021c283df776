//! Sentiment analysis rows and the aggregate shapes built from them.

use sentiment_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `sentiment_analyses` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct SentimentAnalysis {
    #[serde(rename = "analise_id")]
    pub id: DbId,
    #[serde(rename = "acao_id")]
    pub action_id: DbId,
    #[serde(rename = "sentimento")]
    pub sentiment: String,
    pub score: f64,
    #[serde(rename = "modelo")]
    pub model: Option<String>,
    #[serde(rename = "data_analise")]
    pub analyzed_at: Timestamp,
}

/// DTO for recording a scored analysis. `analyzed_at` defaults to now.
#[derive(Debug)]
pub struct CreateSentimentAnalysis {
    pub action_id: DbId,
    pub sentiment: String,
    pub score: f64,
    pub model: Option<String>,
    pub analyzed_at: Option<Timestamp>,
}

/// One label and how many analyses carry it.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct SentimentCount {
    #[serde(rename = "sentimento")]
    pub sentiment: String,
    pub count: i64,
}

/// One scored action joined to its event and the agent who handled it.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ServiceInteraction {
    #[serde(rename = "conversa")]
    pub conversation: String,
    pub score: f64,
    #[serde(rename = "termo")]
    pub term: String,
    #[serde(rename = "sentimento_mais")]
    pub dominant_sentiment: String,
    #[serde(rename = "atendente")]
    pub agent_name: String,
    #[serde(rename = "sentimento_atendente")]
    pub agent_sentiment: String,
}
