pub mod admin;
pub mod content;
pub mod health;
pub mod submissions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /services, /projects, /team, /testimonials,
/// /events, /collaborations, /settings         content reads
/// /contact, /newsletter/subscribe,
/// /internships/apply                         form submissions
/// /admin/...                                 submission listings (bearer key)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(content::router())
        .merge(submissions::router())
        .nest("/admin", admin::router())
}
