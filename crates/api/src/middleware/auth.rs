//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use sentiment_core::error::CoreError;
use sentiment_core::types::DbId;
use sentiment_db::repositories::AccountRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated account extracted from a JWT Bearer token in the `Authorization` header.
///
/// The token must verify and its `sub` must still name an existing account:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(account_id = user.account_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The account's internal database id (from `claims.sub`).
    pub account_id: DbId,
    /// Logged alongside actions the account triggers.
    pub username: String,
}

const INVALID_CREDENTIALS: &str = "Não foi possível validar as credenciais";

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.to_string()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthorized("Not authenticated"))?;

        // The scheme name is case-insensitive (RFC 7235).
        let token = auth_header
            .split_once(' ')
            .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
            .map(|(_, token)| token.trim())
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                unauthorized("Invalid Authorization format. Expected: Bearer <token>")
            })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|e| {
            tracing::debug!(error = %e, "Rejected bearer token");
            unauthorized(INVALID_CREDENTIALS)
        })?;

        let account = AccountRepo::find_by_id(&state.pool, claims.sub)
            .await?
            .ok_or_else(|| unauthorized(INVALID_CREDENTIALS))?;

        Ok(AuthUser {
            account_id: account.id,
            username: account.username,
        })
    }
}
