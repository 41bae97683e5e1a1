use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use srimitha_core::types::{DbId, Timestamp};

/// A row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: DbId,
    pub name: String,
    pub position: Option<String>,
    pub company: Option<String>,
    pub quote: String,
    pub image: Option<String>,
    /// 1-5, enforced by `ck_testimonials_rating`.
    pub rating: i16,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTestimonial {
    pub name: String,
    pub position: Option<String>,
    pub company: Option<String>,
    pub quote: String,
    pub image: Option<String>,
    /// Defaults to 5 if omitted.
    pub rating: Option<i16>,
    /// Defaults to `true` if omitted.
    pub is_active: Option<bool>,
}
