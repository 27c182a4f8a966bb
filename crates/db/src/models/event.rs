//! Event entity model and meeting DTOs.

use pony_core::event_kind::EventKind;
use pony_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `events` table.
///
/// Events are a tagged union: `event_type` discriminates the variant and the
/// variant-specific columns (`transcript`, `location`) are `NULL` for
/// variants that do not carry them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub customer_id: DbId,
    pub event_type: String,
    pub timestamp: Timestamp,
    /// Flat participant list (comma-separated names).
    pub participants: Option<String>,
    pub transcript: Option<String>,
    pub location: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Event {
    /// The parsed variant discriminator, or `None` for an unknown value.
    pub fn kind(&self) -> Option<EventKind> {
        EventKind::parse(&self.event_type)
    }

    /// The transcript, if this event is a meeting with a non-blank
    /// transcript. Only such events are eligible for summarization.
    pub fn summarizable_transcript(&self) -> Option<&str> {
        if self.kind() != Some(EventKind::Meeting) {
            return None;
        }
        self.transcript
            .as_deref()
            .filter(|t| !t.trim().is_empty())
    }
}

/// DTO for creating a new meeting event.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMeeting {
    pub customer_id: DbId,
    pub timestamp: Timestamp,
    pub participants: Option<String>,
    pub transcript: Option<String>,
    pub location: Option<String>,
}

/// DTO for updating an existing meeting. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMeeting {
    pub timestamp: Option<Timestamp>,
    pub participants: Option<String>,
    pub transcript: Option<String>,
    pub location: Option<String>,
}
