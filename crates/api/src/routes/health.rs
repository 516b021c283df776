use std::time::Duration;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Upper bound on the database probe so a stuck pool reports `degraded`
/// instead of tripping the request timeout.
const DB_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let probe = sentiment_db::health_check(&state.pool);
    let db_healthy = matches!(tokio::time::timeout(DB_PROBE_TIMEOUT, probe).await, Ok(Ok(())));

    if !db_healthy {
        tracing::warn!("Database probe failed, reporting degraded");
    }

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mounted at the root next to the API routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
