//! Service event (ticket) model.

use sentiment_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `events` table. `closed_at` is `None` while the event is open.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    #[serde(rename = "event_id")]
    pub id: DbId,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "data_abertura")]
    pub opened_at: Timestamp,
    #[serde(rename = "data_baixa")]
    pub closed_at: Option<Timestamp>,
    pub status_id: i32,
}

#[derive(Debug)]
pub struct CreateEvent {
    pub description: String,
    pub opened_at: Timestamp,
    pub closed_at: Option<Timestamp>,
    pub status_id: i32,
}
