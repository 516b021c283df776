//! Repository for the `actions` table.

use sqlx::PgPool;

use crate::models::action::{Action, CreateAction};

/// Column list for `actions` queries.
const COLUMNS: &str = "id, event_id, description, agent_id, client_id, occurred_at";

pub struct ActionRepo;

impl ActionRepo {
    /// Insert an action. Fails with a foreign-key violation if the event,
    /// agent or client does not exist.
    pub async fn create(pool: &PgPool, input: &CreateAction) -> Result<Action, sqlx::Error> {
        let query = format!(
            "INSERT INTO actions (event_id, description, agent_id, client_id, occurred_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Action>(&query)
            .bind(input.event_id)
            .bind(&input.description)
            .bind(input.agent_id)
            .bind(input.client_id)
            .bind(input.occurred_at)
            .fetch_one(pool)
            .await
    }
}
