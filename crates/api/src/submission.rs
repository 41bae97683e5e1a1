//! Response envelope and error type shared by the three public forms.
//!
//! Every form answers with `{success, message, data?, errors?}`. Successful
//! inserts are 201, a repeat newsletter subscription is 200, invalid input is
//! 400 with field errors, and storage failures are 500 with the form's
//! generic failure copy.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use srimitha_core::submission::{field_errors, FieldError, Form};
use validator::Validate;

/// The submission envelope.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse<T: Serialize> {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl<T: Serialize> SubmissionResponse<T> {
    pub fn ok(message: &'static str, data: Option<T>) -> Self {
        Self {
            success: true,
            message,
            data,
            errors: None,
        }
    }
}

/// Handler return type for form endpoints.
pub type SubmissionResult<T> = Result<(StatusCode, Json<SubmissionResponse<T>>), SubmissionError>;

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The body failed to parse or validate.
    #[error("invalid {form:?} submission")]
    Invalid { form: Form, errors: Vec<FieldError> },

    /// The insert failed.
    #[error("{form:?} submission failed: {source}")]
    Storage {
        form: Form,
        #[source]
        source: sqlx::Error,
    },
}

impl SubmissionError {
    pub fn storage(form: Form) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| SubmissionError::Storage { form, source }
    }
}

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            SubmissionError::Invalid { form, errors } => (
                StatusCode::BAD_REQUEST,
                SubmissionResponse::<()> {
                    success: false,
                    message: form.invalid_message(),
                    data: None,
                    errors: Some(errors),
                },
            ),
            SubmissionError::Storage { form, source } => {
                tracing::error!(form = ?form, error = %source, "Submission insert failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SubmissionResponse::<()> {
                        success: false,
                        message: form.failure_message(),
                        data: None,
                        errors: None,
                    },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

/// Unwrap a JSON body and run its `validator` rules.
///
/// A body that is not JSON (or not an object of the right shape) becomes a
/// single `body` field error so the client always sees the envelope.
pub fn accept<T: Validate>(
    form: Form,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, SubmissionError> {
    let Json(input) = payload.map_err(|rejection| SubmissionError::Invalid {
        form,
        errors: vec![FieldError::new("body", rejection.body_text())],
    })?;

    input.validate().map_err(|e| SubmissionError::Invalid {
        form,
        errors: field_errors(&e),
    })?;

    Ok(input)
}
