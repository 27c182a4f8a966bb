//! Shared domain types for the customer relationship tracker.
//!
//! Holds the primitives used across the workspace: database ID and timestamp
//! aliases, the domain error enum, the event-kind discriminator, and the
//! meeting summary document with its fence-stripping parser.

pub mod error;
pub mod event_kind;
pub mod summary;
pub mod types;
