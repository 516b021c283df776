//! Handler for `POST /token` (password grant).

use axum::extract::State;
use axum::Json;
use sentiment_core::error::CoreError;
use sentiment_db::repositories::AccountRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extract::ApiForm;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Form body for `POST /token`.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /token
///
/// Exchange username + password for a bearer token. Both failure cases are
/// reported as 400 with distinct messages.
pub async fn issue_token(
    State(state): State<AppState>,
    ApiForm(input): ApiForm<TokenRequest>,
) -> AppResult<Json<TokenResponse>> {
    let account = AccountRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::BadCredentials("Usuário incorreto".into()))
        })?;

    let password_valid = verify_password(&input.password, &account.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::info!(account_id = account.id, "Login rejected: wrong password");
        return Err(AppError::Core(CoreError::BadCredentials(
            "Senha incorreta".into(),
        )));
    }

    let access_token = generate_access_token(account.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(account_id = account.id, "Access token issued");

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
    }))
}
