//! `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly and need no database.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use srimitha_api::error::AppError;
use srimitha_core::error::CoreError;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let (status, json) =
        error_to_response(CoreError::not_found("Service", "ev-infrastructure").into()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Service 'ev-infrastructure' not found");
}

#[tokio::test]
async fn unauthorized_and_forbidden() {
    let (status, json) =
        error_to_response(CoreError::Unauthorized("Invalid API key".into()).into()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Invalid API key");

    let (status, json) =
        error_to_response(CoreError::Forbidden("Admin API is disabled".into()).into()).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "FORBIDDEN");
}

#[tokio::test]
async fn database_errors_are_sanitized() {
    for err in [sqlx::Error::PoolTimedOut, sqlx::Error::RowNotFound] {
        let (status, json) = error_to_response(AppError::Database(err)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert_eq!(json["error"], "An internal error occurred");
    }
}

#[tokio::test]
async fn database_detail_is_not_leaked() {
    let err = sqlx::Error::Protocol("password authentication failed for user srimitha".into());
    let (_, json) = error_to_response(AppError::Database(err)).await;

    assert!(!json.to_string().contains("password"));
}
