//! Request extractors that guard routes.
//!
//! - [`admin::RequireAdmin`] -- Requires the configured admin bearer key.

pub mod admin;
