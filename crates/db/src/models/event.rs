//! Workshop/event model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use srimitha_core::types::{DbId, Timestamp};

/// A row from the `events` table.
///
/// `end_date` is not required to follow `start_date`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub location: Option<String>,
    pub image: Option<String>,
    pub capacity: Option<i32>,
    pub registration_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    pub description: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub location: Option<String>,
    pub image: Option<String>,
    pub capacity: Option<i32>,
    pub registration_url: Option<String>,
    /// Defaults to `true` if omitted.
    pub is_active: Option<bool>,
}

/// Query parameters for `GET /events` (`?type=past|upcoming`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventListParams {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}
