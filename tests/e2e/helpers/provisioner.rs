use anyhow::{Context, Result};
use fakturace_backend::infrastructure::config::{Config, Environment, LogFormat};
use fakturace_backend::infrastructure::db::admin::{
    database_url_for, generate_database_name, AdminConnection, DEFAULT_ADMIN_DATABASE_URL,
};
use fakturace_backend::infrastructure::db::{
    create_pool_with_acquire_timeout, run_migrations, DbPool,
};
use fakturace_backend::infrastructure::http::build_router;
use fakturace_backend::maintenance::create_admin;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use super::api_client::TestClient;

pub const TEST_JWT_SECRET: &str = "test-secret";
pub const TEST_CORS_ORIGIN: &str = "http://localhost:3030";

// Concurrent suites share one server; waiting for a connection is not a failure
const POOL_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(120);

/// Maintenance connection string, overridable with `TEST_DATABASE_URL`
pub fn admin_database_url() -> String {
    std::env::var("TEST_DATABASE_URL").unwrap_or_else(|_| DEFAULT_ADMIN_DATABASE_URL.to_string())
}

/// Configuration handed to the app under test; nothing is read from the environment
pub fn test_config(database_url: String) -> Config {
    Config {
        database_url,
        host: "127.0.0.1".to_string(),
        port: 0,
        jwt_secret: TEST_JWT_SECRET.to_string(),
        jwt_expiration_hours: 1,
        cors_origins: vec![TEST_CORS_ORIGIN.to_string()],
        environment: Environment::Test,
        log_format: LogFormat::Pretty,
    }
}

/// A freshly created, migrated and seeded database with the app served on
/// an ephemeral port. Only a fully provisioned environment is ever returned;
/// `teardown` consumes it.
pub struct TestEnvironment {
    pub pool: DbPool,
    pub client: TestClient,
    pub config: Config,
    pub database_name: String,
    admin_url: String,
    server: JoinHandle<()>,
}

struct Prepared {
    pool: DbPool,
    client: TestClient,
    config: Config,
    server: JoinHandle<()>,
}

impl TestEnvironment {
    pub async fn provision(suite_name: &str) -> Result<Self> {
        let database_name = generate_database_name(suite_name)?;
        let admin_url = admin_database_url();

        let admin = AdminConnection::connect(&admin_url)
            .await
            .context("Failed to connect to the maintenance database")?;

        // Leftover from an interrupted run with the same name
        if let Err(e) = admin.drop_database(&database_name).await {
            admin.close().await;
            return Err(e).context(format!("Failed to drop stale database {}", database_name));
        }
        if let Err(e) = admin.create_database(&database_name).await {
            admin.close().await;
            return Err(e).context(format!("Failed to create database {}", database_name));
        }

        match prepare(&admin_url, &database_name).await {
            Ok(prepared) => {
                admin.close().await;
                tracing::info!(database = %database_name, "Test database provisioned");
                Ok(Self {
                    pool: prepared.pool,
                    client: prepared.client,
                    config: prepared.config,
                    database_name,
                    admin_url,
                    server: prepared.server,
                })
            }
            Err(e) => {
                if let Err(drop_err) = admin.drop_database(&database_name).await {
                    tracing::warn!(
                        database = %database_name,
                        error = %drop_err,
                        "Failed to drop partially provisioned database"
                    );
                }
                admin.close().await;
                Err(e)
            }
        }
    }

    /// Stop the app, close the pool and drop the database
    pub async fn teardown(self) -> Result<()> {
        self.server.abort();
        self.pool.close().await;

        let admin = AdminConnection::connect(&self.admin_url).await?;
        let dropped = admin.drop_database(&self.database_name).await;
        admin.close().await;
        dropped?;

        tracing::info!(database = %self.database_name, "Test database dropped");
        Ok(())
    }
}

async fn prepare(admin_url: &str, database_name: &str) -> Result<Prepared> {
    let config = test_config(database_url_for(admin_url, database_name)?);

    let pool = create_pool_with_acquire_timeout(&config.database_url, POOL_ACQUIRE_TIMEOUT)
        .await
        .context("Failed to connect to the test database")?;
    run_migrations(&pool)
        .await
        .context("Failed to apply migrations")?;
    create_admin(Arc::new(pool.clone()))
        .await
        .context("Failed to seed the administrator")?;

    let app = build_router(Arc::new(config.clone()), Arc::new(pool.clone()));
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!(error = %e, "Test server stopped");
        }
    });

    Ok(Prepared {
        client: TestClient::new(&format!("http://{}", addr)),
        pool,
        config,
        server,
    })
}
