use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use srimitha_core::error::CoreError;

/// Error type for the read handlers (content and admin).
///
/// Renders as `{ "error": ..., "code": ... }`. Form submissions answer with
/// their own envelope through [`crate::submission::SubmissionError`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Lookup misses and admin guard rejections.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Any query failure. Always surfaced as a sanitized 500.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Core(CoreError::NotFound { .. }) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Core(CoreError::Unauthorized(_)) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED")
            }
            AppError::Core(CoreError::Forbidden(_)) => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            AppError::Core(CoreError::NotFound { entity, key }) => {
                format!("{entity} '{key}' not found")
            }
            AppError::Core(CoreError::Unauthorized(msg) | CoreError::Forbidden(msg)) => {
                msg.clone()
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                "An internal error occurred".to_string()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
