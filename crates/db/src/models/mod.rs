//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//!   (serialized camelCase, the shape the website frontend reads)
//! - A `Deserialize` create DTO for inserts
//!
//! Submission DTOs additionally derive `Validate`.

pub mod collaboration;
pub mod contact;
pub mod event;
pub mod internship;
pub mod newsletter;
pub mod project;
pub mod service;
pub mod setting;
pub mod team;
pub mod testimonial;
