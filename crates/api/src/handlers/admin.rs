//! Read-only admin listings of form submissions.
//!
//! All endpoints require [`RequireAdmin`].

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use srimitha_core::error::CoreError;
use srimitha_core::types::DbId;
use srimitha_db::repositories::{ContactMessageRepo, InternshipApplicationRepo, NewsletterRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::query::{IncludeInactiveParams, PaginationParams, StatusFilterParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/admin/contact-messages
pub async fn list_contact_messages(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Query(page): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let (limit, offset) = page.resolve();
    let messages = ContactMessageRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(DataResponse { data: messages }))
}

/// GET /api/admin/contact-messages/{id}
pub async fn get_contact_message(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let message = ContactMessageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("ContactMessage", id)))?;
    Ok(Json(DataResponse { data: message }))
}

/// GET /api/admin/newsletter-subscribers
///
/// Active subscribers only unless `?include_inactive=true`.
pub async fn list_newsletter_subscribers(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Query(page): Query<PaginationParams>,
    Query(flags): Query<IncludeInactiveParams>,
) -> AppResult<impl IntoResponse> {
    let (limit, offset) = page.resolve();
    let subscribers =
        NewsletterRepo::list(&state.pool, limit, offset, flags.include_inactive).await?;
    Ok(Json(DataResponse { data: subscribers }))
}

/// GET /api/admin/internship-applications
pub async fn list_internship_applications(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Query(page): Query<PaginationParams>,
    Query(filter): Query<StatusFilterParams>,
) -> AppResult<impl IntoResponse> {
    let (limit, offset) = page.resolve();
    let applications =
        InternshipApplicationRepo::list(&state.pool, limit, offset, filter.status.as_deref())
            .await?;
    Ok(Json(DataResponse { data: applications }))
}
