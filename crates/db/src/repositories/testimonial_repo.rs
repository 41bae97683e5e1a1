//! Repository for the `testimonials` table.

use sqlx::{PgExecutor, PgPool};

use crate::models::testimonial::{CreateTestimonial, Testimonial};

const COLUMNS: &str =
    "id, name, position, company, quote, image, rating, is_active, created_at, updated_at";

pub struct TestimonialRepo;

impl TestimonialRepo {
    /// Insert a testimonial. `rating` defaults to 5 and `is_active` to true.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials (name, position, company, quote, image, rating, is_active)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 5), COALESCE($7, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&input.name)
            .bind(&input.position)
            .bind(&input.company)
            .bind(&input.quote)
            .bind(&input.image)
            .bind(input.rating)
            .bind(input.is_active)
            .fetch_one(executor)
            .await
    }

    /// List active testimonials, newest first.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM testimonials
             WHERE is_active
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .fetch_all(pool)
            .await
    }
}
