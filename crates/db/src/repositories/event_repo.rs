//! Repository for the `events` table.

use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event};

/// Column list for `events` queries.
const COLUMNS: &str = "id, description, opened_at, closed_at, status_id";

pub struct EventRepo;

impl EventRepo {
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (description, opened_at, closed_at, status_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.description)
            .bind(input.opened_at)
            .bind(input.closed_at)
            .bind(input.status_id)
            .fetch_one(pool)
            .await
    }
}
