//! Database cleaner
//!
//! Deletes invoices, work records, hardware, services and organizations in a
//! single transaction. Users are kept.
//! Usage: cargo run --bin clean-database
//!
//! Reads DATABASE_URL (a `.env` file is honoured). Exits with status 1 when
//! anything fails; nothing is deleted in that case.

use anyhow::Context;
use fakturace_backend::infrastructure::config::{database_url_from_env, LogFormat};
use fakturace_backend::infrastructure::db::create_pool;
use fakturace_backend::infrastructure::logging::init_logging;
use fakturace_backend::maintenance::clean_business_data;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    init_logging(&LogFormat::from_env());

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{:#}", e), "Database cleanup failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let database_url = database_url_from_env().context("DATABASE_URL must be set")?;
    let pool = create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;

    info!("Cleaning business data");
    let result = clean_business_data(&pool).await;
    pool.close().await;

    let report = result.context("Failed to delete business data, rolled back")?;
    info!(rows = report.total(), "Database cleaned");

    Ok(())
}
