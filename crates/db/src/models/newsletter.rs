//! Newsletter subscriptions.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use srimitha_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `newsletter_subscribers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSubscriber {
    pub id: DbId,
    pub email: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body of `POST /newsletter/subscribe`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SubscribeNewsletter {
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,
}

/// Result of an insert-if-absent subscription.
#[derive(Debug, Clone)]
pub enum SubscribeOutcome {
    /// The address was new; carries the created row.
    Inserted(NewsletterSubscriber),
    /// A row for the address already existed and was left untouched.
    AlreadySubscribed,
}

#[cfg(test)]
mod tests {
    use srimitha_core::submission::{field_errors, FieldError, MSG_EMAIL};

    use super::*;

    #[test]
    fn invalid_email_reports_shared_message() {
        let input = SubscribeNewsletter {
            email: "reader.example.com".into(),
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(field_errors(&errors), vec![FieldError::new("email", MSG_EMAIL)]);
    }
}
