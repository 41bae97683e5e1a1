use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Admin routes mounted at `/admin`.
///
/// ```text
/// GET /contact-messages             -> list_contact_messages
/// GET /contact-messages/{id}        -> get_contact_message
/// GET /newsletter-subscribers       -> list_newsletter_subscribers
/// GET /internship-applications      -> list_internship_applications
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contact-messages", get(admin::list_contact_messages))
        .route("/contact-messages/{id}", get(admin::get_contact_message))
        .route(
            "/newsletter-subscribers",
            get(admin::list_newsletter_subscribers),
        )
        .route(
            "/internship-applications",
            get(admin::list_internship_applications),
        )
}
