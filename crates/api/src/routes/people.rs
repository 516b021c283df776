use axum::routing::get;
use axum::Router;

use crate::handlers::people;
use crate::state::AppState;

/// ```text
/// GET /tecnicos-lista   -> list_agents
/// GET /clientes-lista   -> list_clients
/// GET /tecnico/{id}     -> agent_profile
/// GET /cliente/{id}     -> client_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tecnicos-lista", get(people::list_agents))
        .route("/clientes-lista", get(people::list_clients))
        .route("/tecnico/{id}", get(people::agent_profile))
        .route("/cliente/{id}", get(people::client_profile))
}
