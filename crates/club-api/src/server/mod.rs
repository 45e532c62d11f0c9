//! Server setup and initialization
//!
//! Provides the application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use club_common::{AppConfig, AppError, JwtService};
use club_db::{
    create_pool, DatabaseConfig, PgAchievementRepository, PgActivityRepository,
    PgCalendarRepository, PgLudotecaRepository, PgRoleRepository, PgStatusRepository,
    PgUserRepository,
};
use club_service::{MediaStore, ServiceContextBuilder};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config().clone();

    let router = create_router()
        // Uploaded images are served straight from disk
        .nest_service("/uploads", ServeDir::new(&config.storage.upload_dir))
        .layer(DefaultBodyLimit::max(
            config.storage.max_file_size_mb as usize * 1024 * 1024,
        ));

    let router = apply_middleware(
        router,
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );

    router.with_state(state)
}

/// Initialize all dependencies and create the AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.token_expiry,
    ));

    let media_store = Arc::new(MediaStore::new(
        &config.storage.upload_dir,
        config.storage.max_file_size_mb,
    ));

    let service_context = ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .role_repo(Arc::new(PgRoleRepository::new(pool.clone())))
        .status_repo(Arc::new(PgStatusRepository::new(pool.clone())))
        .achievement_repo(Arc::new(PgAchievementRepository::new(pool.clone())))
        .activity_repo(Arc::new(PgActivityRepository::new(pool.clone())))
        .ludoteca_repo(Arc::new(PgLudotecaRepository::new(pool.clone())))
        .calendar_repo(Arc::new(PgCalendarRepository::new(pool)))
        .jwt_service(jwt_service)
        .media_store(media_store)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
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
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
