//! Repository for the `events` table.

use pony_core::event_kind::EventKind;
use pony_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::{CreateMeeting, Event, UpdateMeeting};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, customer_id, event_type, timestamp, participants, \
    transcript, location, created_at, updated_at";

/// Provides CRUD operations for events and the meeting variant.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new meeting event, returning the created row.
    pub async fn create_meeting(
        pool: &PgPool,
        input: &CreateMeeting,
    ) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events
                (customer_id, event_type, timestamp, participants, transcript, location)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(input.customer_id)
            .bind(EventKind::Meeting.as_str())
            .bind(input.timestamp)
            .bind(&input.participants)
            .bind(&input.transcript)
            .bind(&input.location)
            .fetch_one(pool)
            .await
    }

    /// Find an event by its internal ID, regardless of variant.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all events for a customer, newest first, paginated.
    pub async fn list_by_customer(
        pool: &PgPool,
        customer_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events
             WHERE customer_id = $1
             ORDER BY timestamp DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(customer_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a meeting. Only non-`None` fields in `input` are applied;
    /// `updated_at` is bumped.
    ///
    /// Returns `None` if no meeting row with the given `id` exists (events of
    /// other variants are not matched).
    pub async fn update_meeting(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMeeting,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET
                timestamp = COALESCE($2, timestamp),
                participants = COALESCE($3, participants),
                transcript = COALESCE($4, transcript),
                location = COALESCE($5, location),
                updated_at = NOW()
             WHERE id = $1 AND event_type = $6
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(input.timestamp)
            .bind(&input.participants)
            .bind(&input.transcript)
            .bind(&input.location)
            .bind(EventKind::Meeting.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Set the participants column for an event, bumping `updated_at`.
    ///
    /// Used by the enrichment step after participant extraction. Returns
    /// `None` if no row with the given `id` exists.
    pub async fn set_participants(
        pool: &PgPool,
        id: DbId,
        participants: &str,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET participants = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(participants)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event by ID. Returns `true` if a row was removed.
    ///
    /// Dependent summaries are removed by `ON DELETE CASCADE`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
