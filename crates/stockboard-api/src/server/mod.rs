//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use stockboard_common::{AppConfig, AppError, JwtService};
use stockboard_db::{
    create_pool, ensure_schema, PgCommentRepository, PgStockRepository, PgUserRepository,
};
use stockboard_market::FmpClient;
use stockboard_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_observability};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_middleware(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let health = apply_observability(health_routes());

    api.merge(health).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&config.database)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    ensure_schema(&pool)
        .await
        .map_err(|e| AppError::Database(format!("Schema bootstrap failed: {e}")))?;
    info!("PostgreSQL connection established");

    let market_client = FmpClient::new(&config.market)
        .map_err(|e| AppError::Config(format!("Market data client: {e}")))?;

    let jwt_service = Arc::new(JwtService::from_config(&config.jwt));

    let service_context = ServiceContextBuilder::new()
        .pool(pool.clone())
        .comment_repo(Arc::new(PgCommentRepository::new(pool.clone())))
        .stock_repo(Arc::new(PgStockRepository::new(pool.clone())))
        .user_repo(Arc::new(PgUserRepository::new(pool)))
        .market_client(Arc::new(market_client))
        .jwt_service(jwt_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();
    let state = create_app_state(config).await?;
    let app = create_app(state);
    run_server(app, &addr).await
}
