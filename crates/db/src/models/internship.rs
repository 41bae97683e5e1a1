//! Internship applications.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use srimitha_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `internship_applications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternshipApplication {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub education: String,
    pub experience: Option<String>,
    pub motivation: String,
    /// Link to an uploaded resume or portfolio.
    pub resume: Option<String>,
    /// Always `pending` on insert; nothing in this service changes it.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body of `POST /internships/apply`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateInternshipApplication {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 5, message = "Education details must be at least 5 characters"))]
    pub education: String,
    pub experience: Option<String>,
    #[validate(length(
        min = 20,
        message = "Motivation statement must be at least 20 characters"
    ))]
    pub motivation: String,
    pub resume: Option<String>,
}

#[cfg(test)]
mod tests {
    use srimitha_core::submission::{
        field_errors, FieldError, MSG_EDUCATION, MSG_EMAIL, MSG_MOTIVATION, MSG_NAME,
    };

    use super::*;

    #[test]
    fn empty_form_reports_shared_messages() {
        let errors = CreateInternshipApplication::default()
            .validate()
            .unwrap_err();
        assert_eq!(
            field_errors(&errors),
            vec![
                FieldError::new("education", MSG_EDUCATION),
                FieldError::new("email", MSG_EMAIL),
                FieldError::new("motivation", MSG_MOTIVATION),
                FieldError::new("name", MSG_NAME),
            ]
        );
    }
}
