//! Repository for the `agents` table and agent-scoped sentiment lookups.

use sentiment_core::types::DbId;
use sqlx::PgPool;

use crate::models::agent::{Agent, AgentProfile, CreateAgent};

/// Column list for `agents` queries.
const COLUMNS: &str = "id, name, email, username";

pub struct AgentRepo;

impl AgentRepo {
    pub async fn create(pool: &PgPool, input: &CreateAgent) -> Result<Agent, sqlx::Error> {
        let query = format!(
            "INSERT INTO agents (name, email, username) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Agent>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.username)
            .fetch_one(pool)
            .await
    }

    /// Every agent, ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Agent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM agents ORDER BY id");
        sqlx::query_as::<_, Agent>(&query).fetch_all(pool).await
    }

    /// The agent's name paired with the latest analysis of one of their actions.
    ///
    /// Returns `None` when the agent does not exist or none of their actions
    /// has been analysed yet.
    pub async fn profile(
        pool: &PgPool,
        agent_id: DbId,
    ) -> Result<Option<AgentProfile>, sqlx::Error> {
        sqlx::query_as::<_, AgentProfile>(
            "SELECT ag.name AS agent_name, \
                    sa.sentiment, \
                    sa.sentiment AS client_sentiment, \
                    sa.sentiment AS term, \
                    sa.score \
             FROM agents ag \
             JOIN actions a ON a.agent_id = ag.id \
             JOIN sentiment_analyses sa ON sa.action_id = a.id \
             WHERE ag.id = $1 \
             ORDER BY sa.analyzed_at DESC, sa.id DESC \
             LIMIT 1",
        )
        .bind(agent_id)
        .fetch_optional(pool)
        .await
    }
}
