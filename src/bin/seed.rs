//! Baseline seed loader
//!
//! Inserts the default administrator and the four baseline organizations.
//! Usage: cargo run --bin seed
//!
//! Reads DATABASE_URL (a `.env` file is honoured). Not idempotent: a second
//! run fails on the unique email/code constraints and exits with status 1.

use anyhow::Context;
use fakturace_backend::infrastructure::config::{database_url_from_env, LogFormat};
use fakturace_backend::infrastructure::db::create_pool;
use fakturace_backend::infrastructure::logging::init_logging;
use fakturace_backend::maintenance::seed_baseline;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    init_logging(&LogFormat::from_env());

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{:#}", e), "Seeding failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let database_url = database_url_from_env().context("DATABASE_URL must be set")?;
    let pool = Arc::new(
        create_pool(&database_url)
            .await
            .context("Failed to connect to database")?,
    );

    info!("Seeding database");
    let result = seed_baseline(pool.clone()).await;
    pool.close().await;

    let report = result.context("Failed to insert seed data")?;
    info!(
        admin = %report.admin.email,
        organizations = report.organizations.len(),
        "Seeding completed"
    );

    Ok(())
}
