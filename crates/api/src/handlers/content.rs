//! Handlers for the public content collections.
//!
//! Lists return bare JSON arrays; single-item lookups return the row or 404.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use srimitha_core::error::CoreError;
use srimitha_db::models::project::ProjectListParams;
use srimitha_db::repositories::{
    CollaborationRepo, ProjectRepo, ServiceRepo, TeamRepo, TestimonialRepo,
};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

/// GET /api/services
pub async fn list_services(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let services = ServiceRepo::list(&state.pool).await?;
    Ok(Json(services))
}

/// GET /api/services/{slug}
pub async fn get_service(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let service = ServiceRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Service", &slug)))?;
    Ok(Json(service))
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// GET /api/projects
///
/// `?category=` is an exact, case-sensitive match. An empty value means no
/// filter.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<impl IntoResponse> {
    let category = params.category.as_deref().filter(|c| !c.is_empty());
    let projects = ProjectRepo::list(&state.pool, category).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{slug}
pub async fn get_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Project", &slug)))?;
    Ok(Json(project))
}

// ---------------------------------------------------------------------------
// Team, testimonials, collaborations
// ---------------------------------------------------------------------------

/// GET /api/team
pub async fn list_team(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(TeamRepo::list(&state.pool).await?))
}

/// GET /api/testimonials
pub async fn list_testimonials(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(TestimonialRepo::list_active(&state.pool).await?))
}

/// GET /api/collaborations
pub async fn list_collaborations(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(CollaborationRepo::list_active(&state.pool).await?))
}
