//! Repository for the `sentiment_analyses` table.
//!
//! Holds the read side of the reporting API: full listings, label
//! aggregates, range filters and the joins back through `actions` to
//! events and agents. Every listing is ordered by analysis id so results
//! are stable between calls.

use sentiment_core::sentiment::{DayWindow, ScoreRange, NEGATIVE_LABEL};
use sentiment_core::types::DbId;
use sqlx::PgPool;

use crate::models::sentiment::{
    CreateSentimentAnalysis, SentimentAnalysis, SentimentCount, ServiceInteraction,
};

/// Column list for `sentiment_analyses` queries, qualified with the `sa` alias.
const COLUMNS: &str = "sa.id, sa.action_id, sa.sentiment, sa.score, sa.model, sa.analyzed_at";

/// Label histogram, most frequent first. Equal counts fall back to label order.
const LABEL_COUNTS: &str = "\
    SELECT sentiment, COUNT(*) AS count \
    FROM sentiment_analyses \
    GROUP BY sentiment \
    ORDER BY count DESC, sentiment ASC";

pub struct SentimentRepo;

impl SentimentRepo {
    /// Record an analysis for an existing action.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSentimentAnalysis,
    ) -> Result<SentimentAnalysis, sqlx::Error> {
        let query = format!(
            "INSERT INTO sentiment_analyses AS sa (action_id, sentiment, score, model, analyzed_at) \
             VALUES ($1, $2, $3, $4, COALESCE($5, NOW())) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SentimentAnalysis>(&query)
            .bind(input.action_id)
            .bind(&input.sentiment)
            .bind(input.score)
            .bind(&input.model)
            .bind(input.analyzed_at)
            .fetch_one(pool)
            .await
    }

    /// Every analysis in the table.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<SentimentAnalysis>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sentiment_analyses sa ORDER BY sa.id");
        sqlx::query_as::<_, SentimentAnalysis>(&query)
            .fetch_all(pool)
            .await
    }

    /// How many analyses carry each label, descending by count.
    pub async fn recurrent(pool: &PgPool) -> Result<Vec<SentimentCount>, sqlx::Error> {
        sqlx::query_as::<_, SentimentCount>(LABEL_COUNTS)
            .fetch_all(pool)
            .await
    }

    /// The single most frequent label, or `None` on an empty table.
    pub async fn most_frequent(pool: &PgPool) -> Result<Option<SentimentCount>, sqlx::Error> {
        let query = format!("{LABEL_COUNTS} LIMIT 1");
        sqlx::query_as::<_, SentimentCount>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Analyses of actions performed by the given agent.
    pub async fn list_by_agent(
        pool: &PgPool,
        agent_id: DbId,
    ) -> Result<Vec<SentimentAnalysis>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} \
             FROM sentiment_analyses sa \
             JOIN actions a ON a.id = sa.action_id \
             WHERE a.agent_id = $1 \
             ORDER BY sa.id"
        );
        sqlx::query_as::<_, SentimentAnalysis>(&query)
            .bind(agent_id)
            .fetch_all(pool)
            .await
    }

    /// Event text, score, label and agent name for every analysed action.
    ///
    /// All joins are inner joins: actions without an agent or without an
    /// analysis are left out.
    pub async fn service_interactions(
        pool: &PgPool,
    ) -> Result<Vec<ServiceInteraction>, sqlx::Error> {
        sqlx::query_as::<_, ServiceInteraction>(
            "SELECT e.description AS conversation, \
                    sa.score, \
                    sa.sentiment AS term, \
                    sa.sentiment AS dominant_sentiment, \
                    ag.name AS agent_name, \
                    sa.sentiment AS agent_sentiment \
             FROM events e \
             JOIN actions a ON a.event_id = e.id \
             JOIN sentiment_analyses sa ON sa.action_id = a.id \
             JOIN agents ag ON ag.id = a.agent_id \
             ORDER BY sa.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Analyses whose score lies in `range`, both ends inclusive.
    pub async fn list_by_score_range(
        pool: &PgPool,
        range: ScoreRange,
    ) -> Result<Vec<SentimentAnalysis>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sentiment_analyses sa \
             WHERE sa.score >= $1 AND sa.score <= $2 \
             ORDER BY sa.id"
        );
        sqlx::query_as::<_, SentimentAnalysis>(&query)
            .bind(range.min)
            .bind(range.max)
            .fetch_all(pool)
            .await
    }

    /// Analyses performed inside `window`.
    pub async fn list_by_date_range(
        pool: &PgPool,
        window: DayWindow,
    ) -> Result<Vec<SentimentAnalysis>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sentiment_analyses sa \
             WHERE sa.analyzed_at >= $1 AND sa.analyzed_at < $2 \
             ORDER BY sa.id"
        );
        sqlx::query_as::<_, SentimentAnalysis>(&query)
            .bind(window.start)
            .bind(window.end_exclusive)
            .fetch_all(pool)
            .await
    }

    /// The negative analysis with the lowest score, if any.
    pub async fn most_negative(pool: &PgPool) -> Result<Option<SentimentAnalysis>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sentiment_analyses sa \
             WHERE LOWER(sa.sentiment) = $1 \
             ORDER BY sa.score ASC, sa.id ASC \
             LIMIT 1"
        );
        sqlx::query_as::<_, SentimentAnalysis>(&query)
            .bind(NEGATIVE_LABEL)
            .fetch_optional(pool)
            .await
    }

    /// Total number of analyses.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM sentiment_analyses")
            .fetch_one(pool)
            .await
    }
}
