//! Event summary entity model.

use pony_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `event_summaries` table.
///
/// `summary` is stored as opaque JSONB: whatever document the summarization
/// pipeline produced, including its fallback variant.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventSummary {
    pub id: DbId,
    pub event_id: DbId,
    pub summary: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
