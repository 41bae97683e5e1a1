//! Shared response envelope types for API handlers.

use serde::Serialize;

/// `{ "data": T }` envelope used by the admin listings.
///
/// Public content reads return bare arrays/objects because the site
/// frontend consumes them that way.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
