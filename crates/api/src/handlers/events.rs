use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use srimitha_core::error::CoreError;
use srimitha_core::events::EventWindow;
use srimitha_core::types::DbId;
use srimitha_db::models::event::EventListParams;
use srimitha_db::repositories::EventRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/events?type=upcoming|past
///
/// Anything other than `past` selects the upcoming window. The cut-off is
/// the time the request is handled.
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<EventListParams>,
) -> AppResult<impl IntoResponse> {
    let window = EventWindow::from_param(params.kind.as_deref());
    let events = EventRepo::list_window(&state.pool, window, Utc::now()).await?;

    tracing::debug!(window = window.as_str(), count = events.len(), "Listed events");

    Ok(Json(events))
}

/// GET /api/events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Event", id)))?;
    Ok(Json(event))
}
