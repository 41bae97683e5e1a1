//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod collaboration_repo;
pub mod contact_repo;
pub mod event_repo;
pub mod internship_repo;
pub mod newsletter_repo;
pub mod project_repo;
pub mod service_repo;
pub mod setting_repo;
pub mod team_repo;
pub mod testimonial_repo;

pub use collaboration_repo::CollaborationRepo;
pub use contact_repo::ContactMessageRepo;
pub use event_repo::EventRepo;
pub use internship_repo::InternshipApplicationRepo;
pub use newsletter_repo::NewsletterRepo;
pub use project_repo::ProjectRepo;
pub use service_repo::ServiceRepo;
pub use setting_repo::SettingRepo;
pub use team_repo::TeamRepo;
pub use testimonial_repo::TestimonialRepo;
