//! Route definitions for the sentiment reports and the pipeline hand-off.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{analysis, sentiment};
use crate::state::AppState;

/// ```text
/// POST /sentimento/create          -> request_analysis (requires auth)
/// POST /sentimento/recebido        -> receive_result
/// GET  /sentimento/all             -> list_all
/// GET  /sentimento/recorrente      -> recurrent
/// GET  /sentimento/tecnico/{id}    -> list_by_agent
/// GET  /sentimento/by-score        -> list_by_score
/// GET  /sentimento/by-data         -> list_by_date
/// GET  /sentimento/mais-negativo   -> most_negative
/// GET  /sentimento/quantidade      -> count
/// GET  /sentimento/mais-frequente  -> most_frequent
/// GET  /atendimento                -> service_interactions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sentimento/create", post(analysis::request_analysis))
        .route("/sentimento/recebido", post(analysis::receive_result))
        .route("/sentimento/all", get(sentiment::list_all))
        .route("/sentimento/recorrente", get(sentiment::recurrent))
        .route("/sentimento/tecnico/{id}", get(sentiment::list_by_agent))
        .route("/sentimento/by-score", get(sentiment::list_by_score))
        .route("/sentimento/by-data", get(sentiment::list_by_date))
        .route("/sentimento/mais-negativo", get(sentiment::most_negative))
        .route("/sentimento/quantidade", get(sentiment::count))
        .route("/sentimento/mais-frequente", get(sentiment::most_frequent))
        .route("/atendimento", get(sentiment::service_interactions))
}
