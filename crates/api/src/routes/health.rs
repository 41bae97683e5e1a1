//! Liveness and database reachability.
//!
//! ```text
//! GET /health   200 {"status":"ok","database":"reachable"}
//!               503 {"status":"degraded","database":"unreachable"}
//! ```

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

impl HealthResponse {
    fn for_database(db_reachable: bool) -> (StatusCode, Self) {
        if db_reachable {
            (
                StatusCode::OK,
                Self {
                    status: "ok",
                    database: "reachable",
                },
            )
        } else {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Self {
                    status: "degraded",
                    database: "unreachable",
                },
            )
        }
    }
}

/// Load balancers take the site out of rotation on 503, so an unreachable
/// database is reported through the status code as well as the body.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let reachable = match srimitha_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            false
        }
    };

    let (status, body) = HealthResponse::for_database(reachable);
    (status, Json(body))
}

/// Mounted at the root, outside `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
