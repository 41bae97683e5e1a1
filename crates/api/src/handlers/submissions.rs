//! Handlers for the three public forms.
//!
//! Each handler parses and validates the body through [`accept`], performs a
//! single insert, and answers with the submission envelope.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use srimitha_core::submission::{normalize_email, Form, MSG_ALREADY_SUBSCRIBED};
use srimitha_db::models::contact::{ContactMessage, CreateContactMessage};
use srimitha_db::models::internship::{CreateInternshipApplication, InternshipApplication};
use srimitha_db::models::newsletter::{
    NewsletterSubscriber, SubscribeNewsletter, SubscribeOutcome,
};
use srimitha_db::repositories::{ContactMessageRepo, InternshipApplicationRepo, NewsletterRepo};

use crate::state::AppState;
use crate::submission::{accept, SubmissionError, SubmissionResponse, SubmissionResult};

/// POST /api/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<CreateContactMessage>, JsonRejection>,
) -> SubmissionResult<ContactMessage> {
    let form = Form::Contact;
    let input = accept(form, payload)?;

    let message = ContactMessageRepo::create(&state.pool, &input)
        .await
        .map_err(SubmissionError::storage(form))?;

    tracing::info!(contact_message_id = message.id, "Contact message received");

    Ok((
        StatusCode::CREATED,
        Json(SubmissionResponse::ok(form.success_message(), Some(message))),
    ))
}

/// POST /api/newsletter/subscribe
///
/// Idempotent: an address that is already on the list answers 200 with
/// `success: true` instead of an error.
pub async fn subscribe_newsletter(
    State(state): State<AppState>,
    payload: Result<Json<SubscribeNewsletter>, JsonRejection>,
) -> SubmissionResult<NewsletterSubscriber> {
    let form = Form::Newsletter;
    let payload = payload.map(|Json(mut input)| {
        input.email = normalize_email(&input.email);
        Json(input)
    });
    let input = accept(form, payload)?;

    let outcome = NewsletterRepo::subscribe(&state.pool, &input.email)
        .await
        .map_err(SubmissionError::storage(form))?;

    Ok(match outcome {
        SubscribeOutcome::Inserted(subscriber) => {
            tracing::info!(subscriber_id = subscriber.id, "Newsletter subscription added");
            (
                StatusCode::CREATED,
                Json(SubmissionResponse::ok(form.success_message(), Some(subscriber))),
            )
        }
        SubscribeOutcome::AlreadySubscribed => {
            tracing::info!("Newsletter subscription already present");
            (
                StatusCode::OK,
                Json(SubmissionResponse::ok(MSG_ALREADY_SUBSCRIBED, None)),
            )
        }
    })
}

/// POST /api/internships/apply
pub async fn apply_internship(
    State(state): State<AppState>,
    payload: Result<Json<CreateInternshipApplication>, JsonRejection>,
) -> SubmissionResult<InternshipApplication> {
    let form = Form::Internship;
    let input = accept(form, payload)?;

    let application = InternshipApplicationRepo::create(&state.pool, &input)
        .await
        .map_err(SubmissionError::storage(form))?;

    tracing::info!(application_id = application.id, "Internship application received");

    Ok((
        StatusCode::CREATED,
        Json(SubmissionResponse::ok(form.success_message(), Some(application))),
    ))
}
