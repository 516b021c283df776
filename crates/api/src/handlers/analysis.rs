//! Hand-off to and from the external sentiment pipeline.
//!
//! `POST /sentimento/create` publishes an action's description for scoring;
//! `POST /sentimento/recebido` is where the pipeline reports back.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sentiment_core::error::CoreError;
use sentiment_db::models::action::Action;
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

pub const PUBLISHED_MESSAGE: &str = "Descrições enviadas com sucesso para análise de sentimento.";
pub const RECEIVED_MESSAGE: &str = "Sentimento recebido";

/// Result reported by the scoring pipeline.
///
/// `resultado` is whatever the model emits (a label, a score, an object);
/// only an empty value is refused.
#[derive(Debug, Deserialize, Validate)]
pub struct IngestionPayload {
    #[validate(length(min = 1, message = "texto must not be empty"))]
    pub texto: String,
    pub resultado: Value,
}

/// `null`, `false`, zero, `""`, `[]` and `{}` carry no result.
fn is_empty_result(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// POST /sentimento/create
///
/// Queue the action's description for analysis. Returns as soon as the
/// broker confirms the message; the score arrives later via ingestion.
pub async fn request_analysis(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiJson(action): ApiJson<Action>,
) -> AppResult<impl IntoResponse> {
    if action.description.trim().is_empty() {
        return Err(CoreError::Validation("descricao must not be empty".to_string()).into());
    }

    state.gateway.request_analysis(&action.description).await?;

    tracing::info!(
        action_id = action.id,
        event_id = action.event_id,
        account_id = auth.account_id,
        username = %auth.username,
        "Action queued for sentiment analysis"
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(PUBLISHED_MESSAGE)),
    ))
}

/// POST /sentimento/recebido
///
/// Acknowledge a scored result. The result is logged, not stored.
// TODO: persist into sentiment_analyses once the pipeline echoes back the
// acao_id it scored; the payload carries no key to attach the result to.
pub async fn receive_result(
    ApiJson(payload): ApiJson<IngestionPayload>,
) -> AppResult<impl IntoResponse> {
    payload.validate().map_err(CoreError::from)?;
    if is_empty_result(&payload.resultado) {
        return Err(CoreError::Validation("resultado must not be empty".to_string()).into());
    }

    tracing::info!(
        texto = %payload.texto,
        resultado = %payload.resultado,
        "Sentiment result received"
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(RECEIVED_MESSAGE)),
    ))
}
