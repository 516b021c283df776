//! Route definitions for token issuance.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// ```text
/// POST /token   -> issue_token (form body)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/token", post(auth::issue_token))
}
