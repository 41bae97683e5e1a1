//! Rules for the read-mostly content tables (services, projects,
//! testimonials).

use std::sync::LazyLock;

use regex::Regex;

/// Lowest testimonial rating.
pub const MIN_RATING: i16 = 1;

/// Highest testimonial rating, also the column default.
pub const MAX_RATING: i16 = 5;

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid regex"));

/// A slug is lowercase ASCII alphanumerics separated by single hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_RE.is_match(slug)
}

pub fn is_valid_rating(rating: i16) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}
