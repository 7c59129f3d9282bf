use fakturace_backend::infrastructure::config::Config;
use fakturace_backend::infrastructure::db::{check_connection, create_pool, run_migrations};
use fakturace_backend::infrastructure::http::start_http_server;
use fakturace_backend::infrastructure::logging::init_logging;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config.log_format);

    tracing::info!(
        environment = ?config.environment,
        "Starting Fakturace Backend on {}:{}",
        config.host,
        config.port
    );

    // Create database connection pool
    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    // Verify database connection
    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    start_http_server(Arc::new(config), Arc::new(pool)).await?;

    Ok(())
}
