//! Action model: one recorded interaction within an event.

use sentiment_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `actions` table.
///
/// Also the body accepted by `POST /sentimento/create`, hence `Deserialize`.
/// Agent and client attribution are both optional.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "acao_id")]
    pub id: DbId,
    pub event_id: DbId,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(default)]
    pub agent_id: Option<DbId>,
    #[serde(rename = "user_id", default)]
    pub client_id: Option<DbId>,
    #[serde(rename = "data_acao", default)]
    pub occurred_at: Option<Timestamp>,
}

#[derive(Debug)]
pub struct CreateAction {
    pub event_id: DbId,
    pub description: String,
    pub agent_id: Option<DbId>,
    pub client_id: Option<DbId>,
    pub occurred_at: Option<Timestamp>,
}
