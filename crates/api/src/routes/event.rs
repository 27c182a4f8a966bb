//! Route definitions for the events resource.
//!
//! Meetings are the only event variant today, so variant-specific writes
//! live under a `/meetings` sub-path while reads and deletes address the
//! base `/{id}` paths.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::event;
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// ```text
/// GET    /customer/{customer_id}      list_by_customer (newest first)
/// POST   /meetings                    create_meeting
/// PUT    /meetings/{id}               update_meeting
/// GET    /{id}                        get_by_id
/// DELETE /{id}                        delete
/// GET    /{id}/summary                get_summary
/// POST   /{id}/summary/regenerate     regenerate_summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/customer/{customer_id}", get(event::list_by_customer))
        .route("/meetings", post(event::create_meeting))
        .route("/meetings/{id}", put(event::update_meeting))
        .route("/{id}", get(event::get_by_id).delete(event::delete))
        .route("/{id}/summary", get(event::get_summary))
        .route("/{id}/summary/regenerate", post(event::regenerate_summary))
}
