//! Contact form submissions.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use srimitha_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `contact_messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body of `POST /contact`.
///
/// Missing string fields deserialize as empty so they surface as field
/// errors from [`Validate`] instead of a body rejection.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateContactMessage {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use srimitha_core::submission::{
        field_errors, FieldError, MSG_EMAIL, MSG_MESSAGE, MSG_NAME, MSG_SUBJECT,
    };

    use super::*;

    #[test]
    fn empty_form_reports_shared_messages() {
        let errors = CreateContactMessage::default().validate().unwrap_err();
        assert_eq!(
            field_errors(&errors),
            vec![
                FieldError::new("email", MSG_EMAIL),
                FieldError::new("message", MSG_MESSAGE),
                FieldError::new("name", MSG_NAME),
                FieldError::new("subject", MSG_SUBJECT),
            ]
        );
    }

    #[test]
    fn phone_is_optional() {
        let input = CreateContactMessage {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            phone: None,
            subject: "Quote".into(),
            message: "Ten chars!".into(),
        };
        assert!(input.validate().is_ok());
    }
}
