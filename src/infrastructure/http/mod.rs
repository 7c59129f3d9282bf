use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;
use crate::{
    controllers::{auth::AuthController, health, organization::OrganizationController},
    domain::{auth::AuthService, organization::OrganizationService},
    infrastructure::auth::{auth_middleware, request_id_middleware},
    infrastructure::repositories::{OrganizationRepository, UserRepository},
};

/// Build the application from an explicit configuration and pool.
///
/// Nothing here reads the process environment, so test harnesses can run
/// several independently configured apps in one process.
pub fn build_router(config: Arc<Config>, pool: Arc<DbPool>) -> Router {
    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let organization_repo = Arc::new(OrganizationRepository::new(pool.clone()));

    let auth_service = Arc::new(AuthService::new(user_repo.clone(), config.clone()));
    let organization_service = Arc::new(OrganizationService::new(organization_repo));

    let auth_controller = Arc::new(AuthController::new(auth_service));
    let organization_controller = Arc::new(OrganizationController::new(organization_service));

    // Auth routes (public)
    let auth_routes = Router::new()
        .route("/api/auth/login", post(AuthController::login))
        .with_state(auth_controller.clone());

    // Token check (needs auth)
    let verify_routes = Router::new()
        .route("/api/auth/verify", get(AuthController::verify))
        .with_state(auth_controller)
        .layer(middleware::from_fn_with_state(
            (user_repo.clone(), config.clone()),
            auth_middleware,
        ));

    // Organization routes (need auth, writes also check permissions)
    let organization_routes = Router::new()
        .route(
            "/api/organizations",
            get(OrganizationController::list_organizations)
                .post(OrganizationController::create_organization),
        )
        .route(
            "/api/organizations/:id",
            get(OrganizationController::get_organization)
                .put(OrganizationController::update_organization)
                .delete(OrganizationController::delete_organization),
        )
        .with_state(organization_controller)
        .layer(middleware::from_fn_with_state(
            (user_repo, config.clone()),
            auth_middleware,
        ));

    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/health/ready", get(health::health_ready))
        .with_state(pool)
        .merge(auth_routes)
        .merge(verify_routes)
        .merge(organization_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors_layer(&config))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    pool: Arc<DbPool>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(config.clone(), pool);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
