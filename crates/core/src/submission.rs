//! Shared shaping for the three public form submissions (contact,
//! newsletter, internship application).
//!
//! Request DTOs carry `validator` derive rules; this module turns the
//! resulting [`ValidationErrors`] into the flat field/message list the
//! frontend renders, and holds the user-facing copy for each outcome.

use serde::Serialize;
use validator::ValidationErrors;

// ---------------------------------------------------------------------------
// Field messages
// ---------------------------------------------------------------------------

pub const MSG_NAME: &str = "Name must be at least 2 characters";
pub const MSG_EMAIL: &str = "Please provide a valid email address";
pub const MSG_SUBJECT: &str = "Subject is required";
pub const MSG_MESSAGE: &str = "Message must be at least 10 characters";
pub const MSG_EDUCATION: &str = "Education details must be at least 5 characters";
pub const MSG_MOTIVATION: &str = "Motivation statement must be at least 20 characters";

/// Default status for a freshly submitted internship application.
pub const APPLICATION_STATUS_PENDING: &str = "pending";

// ---------------------------------------------------------------------------
// Field errors
// ---------------------------------------------------------------------------

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Flatten `validator` output into one [`FieldError`] per failed rule,
/// sorted by field name.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({})", e.code));
                FieldError::new(field.clone(), message)
            })
        })
        .collect();
    out.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    out
}

// ---------------------------------------------------------------------------
// Input normalisation
// ---------------------------------------------------------------------------

/// Blank optional fields are stored as NULL. Non-blank values are kept
/// verbatim.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

/// Newsletter addresses are compared case-insensitively.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

// ---------------------------------------------------------------------------
// Form copy
// ---------------------------------------------------------------------------

/// The three public forms and the copy shown for each outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    Contact,
    Newsletter,
    Internship,
}

impl Form {
    pub fn success_message(self) -> &'static str {
        match self {
            Form::Contact => {
                "Your message has been sent successfully. We'll get back to you soon!"
            }
            Form::Newsletter => "Thank you for subscribing to our newsletter!",
            Form::Internship => {
                "Your application has been submitted successfully! We'll review it and get back to you."
            }
        }
    }

    pub fn invalid_message(self) -> &'static str {
        match self {
            Form::Contact => "Please check your inputs and try again.",
            Form::Newsletter => "Please provide a valid email address.",
            Form::Internship => "Please check your application details and try again.",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Form::Contact => "Failed to send your message. Please try again later.",
            Form::Newsletter => "Failed to subscribe to the newsletter. Please try again later.",
            Form::Internship => "Failed to submit your application. Please try again later.",
        }
    }
}

/// Copy for a repeat newsletter subscription.
pub const MSG_ALREADY_SUBSCRIBED: &str = "You are already subscribed to our newsletter.";
