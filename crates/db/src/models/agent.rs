//! Service agent ("técnico") model and per-agent projections.

use sentiment_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `agents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Agent {
    #[serde(rename = "agent_id")]
    pub id: DbId,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug)]
pub struct CreateAgent {
    pub name: String,
    pub email: Option<String>,
    pub username: Option<String>,
}

/// An agent paired with one sentiment analysis of an action they performed.
///
/// The label is repeated under the three names the reporting UI reads.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AgentProfile {
    #[serde(rename = "atendente")]
    pub agent_name: String,
    #[serde(rename = "sentimento")]
    pub sentiment: String,
    #[serde(rename = "sentimento_clientes")]
    pub client_sentiment: String,
    #[serde(rename = "termo")]
    pub term: String,
    pub score: f64,
}
