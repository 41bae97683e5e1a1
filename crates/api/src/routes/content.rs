use axum::routing::get;
use axum::Router;

use crate::handlers::{content, events, settings};
use crate::state::AppState;

/// Public read-only content routes.
///
/// ```text
/// GET /services                -> list_services
/// GET /services/{slug}         -> get_service
/// GET /projects                -> list_projects (?category=)
/// GET /projects/{slug}         -> get_project
/// GET /team                    -> list_team
/// GET /testimonials            -> list_testimonials
/// GET /events                  -> list_events (?type=upcoming|past)
/// GET /events/{id}             -> get_event
/// GET /collaborations          -> list_collaborations
/// GET /settings                -> get_settings
/// GET /settings/{key}          -> get_setting
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/services", get(content::list_services))
        .route("/services/{slug}", get(content::get_service))
        .route("/projects", get(content::list_projects))
        .route("/projects/{slug}", get(content::get_project))
        .route("/team", get(content::list_team))
        .route("/testimonials", get(content::list_testimonials))
        .route("/events", get(events::list_events))
        .route("/events/{id}", get(events::get_event))
        .route("/collaborations", get(content::list_collaborations))
        .route("/settings", get(settings::get_settings))
        .route("/settings/{key}", get(settings::get_setting))
}
