use axum::routing::post;
use axum::Router;

use crate::handlers::submissions;
use crate::state::AppState;

/// Public form routes.
///
/// ```text
/// POST /contact                -> submit_contact
/// POST /newsletter/subscribe   -> subscribe_newsletter
/// POST /internships/apply      -> apply_internship
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contact", post(submissions::submit_contact))
        .route("/newsletter/subscribe", post(submissions::subscribe_newsletter))
        .route("/internships/apply", post(submissions::apply_internship))
}
