//! Login account model.

use sentiment_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full row from the `users` table.
///
/// Contains the password hash -- never serialize this to API responses.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new login account.
#[derive(Debug)]
pub struct CreateAccount {
    pub username: String,
    pub password_hash: String,
}
