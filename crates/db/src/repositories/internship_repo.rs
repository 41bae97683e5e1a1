//! Repository for the `internship_applications` table.

use sqlx::PgPool;
use srimitha_core::submission::{non_blank, APPLICATION_STATUS_PENDING};

use crate::models::internship::{CreateInternshipApplication, InternshipApplication};

const COLUMNS: &str = "id, name, email, phone, education, experience, motivation, resume, \
                       status, created_at, updated_at";

pub struct InternshipApplicationRepo;

impl InternshipApplicationRepo {
    /// Insert an application with status `pending`. Blank optional fields
    /// are stored as NULL.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInternshipApplication,
    ) -> Result<InternshipApplication, sqlx::Error> {
        let query = format!(
            "INSERT INTO internship_applications
                (name, email, phone, education, experience, motivation, resume, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InternshipApplication>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(non_blank(input.phone.as_deref()))
            .bind(&input.education)
            .bind(non_blank(input.experience.as_deref()))
            .bind(&input.motivation)
            .bind(non_blank(input.resume.as_deref()))
            .bind(APPLICATION_STATUS_PENDING)
            .fetch_one(pool)
            .await
    }

    /// Page through applications, newest first, optionally restricted to
    /// one exact status.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
        status: Option<&str>,
    ) -> Result<Vec<InternshipApplication>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM internship_applications
             WHERE ($3::TEXT IS NULL OR status = $3)
             ORDER BY created_at DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, InternshipApplication>(&query)
            .bind(limit)
            .bind(offset)
            .bind(status)
            .fetch_all(pool)
            .await
    }
}
