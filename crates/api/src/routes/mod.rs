pub mod customer;
pub mod event;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /customers                          list, create
/// /customers/{id}                     get, update, delete
///
/// /events/customer/{customer_id}      list (newest first, paginated)
/// /events/meetings                    create meeting
/// /events/meetings/{id}               update meeting
/// /events/{id}                        get, delete
/// /events/{id}/summary                get stored summary
/// /events/{id}/summary/regenerate     recompute summary (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/customers", customer::router())
        .nest("/events", event::router())
}
