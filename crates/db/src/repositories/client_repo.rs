//! Repository for the `clients` table and client-scoped sentiment lookups.

use sentiment_core::types::DbId;
use sqlx::PgPool;

use crate::models::client::{Client, ClientProfile, CreateClient};

/// Column list for `clients` queries.
const COLUMNS: &str = "id, name, email, username";

pub struct ClientRepo;

impl ClientRepo {
    pub async fn create(pool: &PgPool, input: &CreateClient) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (name, email, username) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.username)
            .fetch_one(pool)
            .await
    }

    /// Every client, ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY id");
        sqlx::query_as::<_, Client>(&query).fetch_all(pool).await
    }

    /// The client's name paired with the latest analysis of an action
    /// attributed to them, or `None` if there is no such pairing.
    pub async fn profile(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Option<ClientProfile>, sqlx::Error> {
        sqlx::query_as::<_, ClientProfile>(
            "SELECT c.name AS client_name, \
                    sa.sentiment, \
                    sa.sentiment AS term, \
                    sa.score \
             FROM clients c \
             JOIN actions a ON a.client_id = c.id \
             JOIN sentiment_analyses sa ON sa.action_id = a.id \
             WHERE c.id = $1 \
             ORDER BY sa.analyzed_at DESC, sa.id DESC \
             LIMIT 1",
        )
        .bind(client_id)
        .fetch_optional(pool)
        .await
    }
}
