//! Handlers for agents ("técnicos") and clients.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use sentiment_core::error::CoreError;
use sentiment_core::sentiment::require_positive_id;
use sentiment_core::types::DbId;
use sentiment_db::repositories::{AgentRepo, ClientRepo};

use crate::error::{AppError, AppResult};
use crate::extract::ApiPath;
use crate::state::AppState;

/// GET /tecnicos-lista
pub async fn list_agents(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let agents = AgentRepo::list_all(&state.pool).await?;
    Ok(Json(agents))
}

/// GET /clientes-lista
pub async fn list_clients(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let clients = ClientRepo::list_all(&state.pool).await?;
    Ok(Json(clients))
}

/// GET /tecnico/{id}
///
/// The agent's name with the latest sentiment recorded on their actions.
/// 404 when the agent is unknown or has no analysed actions.
pub async fn agent_profile(
    State(state): State<AppState>,
    ApiPath(agent_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let agent_id = require_positive_id("Agent", agent_id)?;

    let profile = AgentRepo::profile(&state.pool, agent_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Agent",
            id: agent_id,
        }))?;

    Ok(Json(profile))
}

/// GET /cliente/{id}
///
/// Same as [`agent_profile`] but for the client side of an action.
pub async fn client_profile(
    State(state): State<AppState>,
    ApiPath(client_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let client_id = require_positive_id("Client", client_id)?;

    let profile = ClientRepo::profile(&state.pool, client_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id: client_id,
        }))?;

    Ok(Json(profile))
}
