//! Handlers for the `/events` resource and its meetings sub-resource.
//!
//! Meeting creation runs best-effort enrichment (participant extraction,
//! summary generation): the meeting row is committed first and survives any
//! pipeline failure. Explicit summary regeneration is the opposite -- the
//! caller asked for it, so a model failure surfaces as an error response.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use pony_core::error::CoreError;
use pony_core::types::DbId;
use pony_db::models::event::{CreateMeeting, Event, UpdateMeeting};
use pony_db::repositories::{EventRepo, EventSummaryRepo};
use pony_llm::Enrichment;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

/// GET /api/v1/events/customer/{customer_id}
pub async fn list_by_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<DbId>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Event>>> {
    let limit = pony_db::clamp_limit(params.limit);
    let offset = pony_db::clamp_offset(params.offset);
    let events = EventRepo::list_by_customer(&state.pool, customer_id, limit, offset).await?;
    Ok(Json(events))
}

/// GET /api/v1/events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Event>> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;
    Ok(Json(event))
}

/// POST /api/v1/events/meetings
///
/// Two-phase create: the meeting row is persisted first, then enrichment
/// runs. Enrichment failures are logged and swallowed; the 201 response and
/// the committed row do not depend on them.
pub async fn create_meeting(
    State(state): State<AppState>,
    Json(input): Json<CreateMeeting>,
) -> AppResult<(StatusCode, Json<Event>)> {
    let mut meeting = EventRepo::create_meeting(&state.pool, &input).await?;

    match enrich_participants(&state, &meeting).await {
        Enrichment::Applied(participants) => {
            match EventRepo::set_participants(&state.pool, meeting.id, &participants).await {
                Ok(Some(updated)) => meeting = updated,
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(
                        event_id = meeting.id,
                        error = %err,
                        "Failed to store extracted participants; meeting created without them"
                    );
                }
            }
        }
        Enrichment::Failed(err) => {
            tracing::warn!(
                event_id = meeting.id,
                error = %err,
                "Participant extraction failed; meeting created without participants"
            );
        }
        Enrichment::Skipped => {}
    }

    if let Some(transcript) = meeting.summarizable_transcript() {
        match state
            .summarizer
            .summarize_meeting(transcript, Some(meeting.id))
            .await
        {
            Ok(summary) => match serde_json::to_value(&summary) {
                Ok(payload) => {
                    if let Err(err) =
                        EventSummaryRepo::upsert(&state.pool, meeting.id, &payload).await
                    {
                        tracing::warn!(
                            event_id = meeting.id,
                            error = %err,
                            "Failed to store generated summary"
                        );
                    }
                }
                Err(err) => {
                    tracing::warn!(event_id = meeting.id, error = %err, "Failed to serialize summary");
                }
            },
            Err(err) => {
                tracing::warn!(
                    event_id = meeting.id,
                    error = %err,
                    "Summary generation failed; meeting created without summary"
                );
            }
        }
    }

    Ok((StatusCode::CREATED, Json(meeting)))
}

/// Best-effort participant extraction for a freshly created meeting.
///
/// Runs only when the caller supplied no participants but did supply a
/// transcript. The returned [`Enrichment`] records which path was taken.
async fn enrich_participants(state: &AppState, meeting: &Event) -> Enrichment<String> {
    if meeting.participants.is_some() {
        return Enrichment::Skipped;
    }
    let Some(transcript) = meeting.summarizable_transcript() else {
        return Enrichment::Skipped;
    };

    match state.summarizer.extract_participants(transcript).await {
        Ok(participants) if !participants.is_empty() => Enrichment::Applied(participants),
        Ok(_) => Enrichment::Skipped,
        Err(err) => Enrichment::Failed(err),
    }
}

/// PUT /api/v1/events/meetings/{id}
pub async fn update_meeting(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMeeting>,
) -> AppResult<Json<Event>> {
    let meeting = EventRepo::update_meeting(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Meeting",
            id,
        }))?;
    Ok(Json(meeting))
}

/// GET /api/v1/events/{id}/summary
///
/// Returns the stored summary payload as-is (including the pipeline's
/// fallback variant, if that is what was stored).
pub async fn get_summary(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let summary = EventSummaryRepo::find_by_event(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Summary",
            id,
        }))?;
    Ok(Json(summary.summary))
}

/// POST /api/v1/events/{id}/summary/regenerate
///
/// Requires the event to exist and to be a meeting with a non-blank
/// transcript; otherwise 404. Unlike creation-time enrichment, a model
/// failure here propagates to the caller.
pub async fn regenerate_summary(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;

    let transcript = event
        .summarizable_transcript()
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;

    let summary = state
        .summarizer
        .summarize_meeting(transcript, Some(event.id))
        .await?;
    let payload = serde_json::to_value(&summary)
        .map_err(|e| AppError::InternalError(format!("Failed to serialize summary: {e}")))?;

    let stored = EventSummaryRepo::upsert(&state.pool, event.id, &payload).await?;
    Ok(Json(stored.summary))
}

/// DELETE /api/v1/events/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EventRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Event", id }))
    }
}
