//! Domain logic for the Srimitha Energy Solutions website backend.
//!
//! Nothing in this crate performs I/O. The `db` and `api` crates build on
//! the types and rules defined here.

pub mod content;
pub mod error;
pub mod events;
pub mod hashing;
pub mod pagination;
pub mod settings;
pub mod submission;
pub mod types;
