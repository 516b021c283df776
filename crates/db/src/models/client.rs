//! Customer ("cliente") model and per-client projection.

use sentiment_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    #[serde(rename = "user_id")]
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug)]
pub struct CreateClient {
    pub name: String,
    pub email: Option<String>,
    pub username: Option<String>,
}

/// A client paired with one sentiment analysis of an action attributed to them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClientProfile {
    #[serde(rename = "cliente")]
    pub client_name: String,
    #[serde(rename = "sentimento")]
    pub sentiment: String,
    #[serde(rename = "termo")]
    pub term: String,
    pub score: f64,
}
