//! The closed set of communication event variants.

use std::fmt;

/// Discriminator for the `events` table.
///
/// Events form a closed tagged union sharing common columns; variant-specific
/// columns (transcript, location) are nullable and only populated for the
/// variants that carry them. Meetings are currently the only variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Meeting,
}

impl EventKind {
    /// The string stored in the `event_type` column.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Meeting => "meeting",
        }
    }

    /// Parse a discriminator string. Returns `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "meeting" => Some(EventKind::Meeting),
            _ => None,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
