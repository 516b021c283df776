pub mod auth;
pub mod health;
pub mod people;
pub mod sentiment;

use axum::routing::get;
use axum::{Json, Router};

use crate::response::MessageResponse;
use crate::state::AppState;

/// Build the API route tree.
///
/// The reporting paths are served at the root, as the dashboard expects.
///
/// ```text
/// GET  /                      welcome message
/// POST /token                 token issuance
/// /sentimento/*, /atendimento sentiment reports and pipeline hand-off
/// /tecnico*, /cliente*        agents and clients
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .merge(auth::router())
        .merge(sentiment::router())
        .merge(people::router())
}

/// GET /
async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Sentiment reporting API"))
}
