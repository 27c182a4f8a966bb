//! Repository for the `event_summaries` table.

use pony_core::types::DbId;
use sqlx::PgPool;

use crate::models::event_summary::EventSummary;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, event_id, summary, created_at, updated_at";

/// Provides read/write operations for event summaries.
pub struct EventSummaryRepo;

impl EventSummaryRepo {
    /// Find the summary for an event.
    ///
    /// One summary per event is a convention, not a constraint; if several
    /// rows exist the first is returned.
    pub async fn find_by_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Option<EventSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM event_summaries WHERE event_id = $1 ORDER BY id LIMIT 1"
        );
        sqlx::query_as::<_, EventSummary>(&query)
            .bind(event_id)
            .fetch_optional(pool)
            .await
    }

    /// Store a summary for an event: update the existing row if one exists,
    /// otherwise insert a new one. Returns the stored row.
    pub async fn upsert(
        pool: &PgPool,
        event_id: DbId,
        summary: &serde_json::Value,
    ) -> Result<EventSummary, sqlx::Error> {
        let update = format!(
            "UPDATE event_summaries SET summary = $2, updated_at = NOW()
             WHERE id = (SELECT id FROM event_summaries WHERE event_id = $1 ORDER BY id LIMIT 1)
             RETURNING {COLUMNS}"
        );
        if let Some(row) = sqlx::query_as::<_, EventSummary>(&update)
            .bind(event_id)
            .bind(summary)
            .fetch_optional(pool)
            .await?
        {
            return Ok(row);
        }

        let insert = format!(
            "INSERT INTO event_summaries (event_id, summary)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EventSummary>(&insert)
            .bind(event_id)
            .bind(summary)
            .fetch_one(pool)
            .await
    }
}
