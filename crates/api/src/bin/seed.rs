//! Provision the content tables with the bundled company copy.
//!
//! Connects to `DATABASE_URL`, applies migrations, then seeds every content
//! table that is still empty. Safe to run repeatedly.

use anyhow::Context;
use chrono::Utc;
use srimitha_db::seed::{seed_content, SeedOutcome};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "srimitha_db=info,srimitha_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = srimitha_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    srimitha_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let reports = seed_content(&pool, Utc::now())
        .await
        .context("Seeding content failed")?;

    let mut seeded = 0;
    for report in &reports {
        match report.outcome {
            SeedOutcome::Seeded(rows) => {
                seeded += 1;
                tracing::info!(table = report.table, rows, "Seeded");
            }
            SeedOutcome::Skipped => {
                tracing::info!(table = report.table, "Already populated");
            }
        }
    }
    tracing::info!(seeded, total = reports.len(), "Seed complete");

    pool.close().await;
    Ok(())
}
