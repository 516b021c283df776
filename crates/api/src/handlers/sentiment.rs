//! Handlers for the sentiment reporting queries.
//!
//! Every endpoint here is a read over the analyses table and its joins.
//! List-shaped queries answer with an empty array when nothing matches.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use sentiment_core::sentiment::{require_positive_id, DayWindow, ScoreRange};
use sentiment_core::types::DbId;
use sentiment_db::repositories::SentimentRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::{ApiPath, ApiQuery};
use crate::response::{CountResponse, MostFrequentResponse, SentimentEnvelope};
use crate::state::AppState;

/// Query parameters for `GET /sentimento/by-data`. Both days are inclusive.
#[derive(Debug, Deserialize)]
pub struct DateRangeParams {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// GET /sentimento/all
pub async fn list_all(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let analyses = SentimentRepo::list_all(&state.pool).await?;
    Ok(Json(analyses))
}

/// GET /sentimento/recorrente
///
/// Label counts, most common first.
pub async fn recurrent(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let counts = SentimentRepo::recurrent(&state.pool).await?;
    Ok(Json(SentimentEnvelope { sentimento: counts }))
}

/// GET /sentimento/tecnico/{id}
pub async fn list_by_agent(
    State(state): State<AppState>,
    ApiPath(agent_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let agent_id = require_positive_id("Agent", agent_id)?;
    let analyses = SentimentRepo::list_by_agent(&state.pool, agent_id).await?;

    tracing::debug!(agent_id, count = analyses.len(), "Listed analyses by agent");
    Ok(Json(analyses))
}

/// GET /atendimento
///
/// One row per analysed action that has an agent, with the event text.
pub async fn service_interactions(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = SentimentRepo::service_interactions(&state.pool).await?;
    Ok(Json(SentimentEnvelope { sentimento: rows }))
}

/// GET /sentimento/by-score?min=&max=
///
/// Missing bounds default to 0.0 and 1.0. An inverted range simply
/// matches nothing.
pub async fn list_by_score(
    State(state): State<AppState>,
    ApiQuery(range): ApiQuery<ScoreRange>,
) -> AppResult<impl IntoResponse> {
    let analyses = SentimentRepo::list_by_score_range(&state.pool, range).await?;
    Ok(Json(analyses))
}

/// GET /sentimento/by-data?start=YYYY-MM-DD&end=YYYY-MM-DD
pub async fn list_by_date(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<DateRangeParams>,
) -> AppResult<impl IntoResponse> {
    let window = DayWindow::inclusive(params.start, params.end);
    let analyses = SentimentRepo::list_by_date_range(&state.pool, window).await?;
    Ok(Json(analyses))
}

/// GET /sentimento/mais-negativo
///
/// The lowest-scored negative analysis, or `null`.
pub async fn most_negative(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let analysis = SentimentRepo::most_negative(&state.pool).await?;
    Ok(Json(analysis))
}

/// GET /sentimento/quantidade
pub async fn count(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let quantidade = SentimentRepo::count(&state.pool).await?;
    Ok(Json(CountResponse { quantidade }))
}

/// GET /sentimento/mais-frequente
pub async fn most_frequent(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let response = match SentimentRepo::most_frequent(&state.pool).await? {
        Some(top) => MostFrequentResponse::Found {
            sentimento_predominante: top.sentiment,
            quantidade: top.count,
        },
        None => MostFrequentResponse::empty(),
    };
    Ok(Json(response))
}
