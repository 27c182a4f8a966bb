//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod customer_repo;
pub mod event_repo;
pub mod event_summary_repo;

pub use customer_repo::CustomerRepo;
pub use event_repo::EventRepo;
pub use event_summary_repo::EventSummaryRepo;
