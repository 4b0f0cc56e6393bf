use axum::{
    routing::{any, get},
    Router,
};
use tower_http::cors::CorsLayer;

use dbcheck_core::DB_CHECK_PATH;

use crate::app_state::AppState;
use crate::handlers;

/// Create the main application router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Status page
        .route("/", get(handlers::status_page))
        // Process liveness, independent of the database
        .route("/health", get(handlers::health))
        // Database connectivity check; method is not significant
        .route(DB_CHECK_PATH, any(handlers::db_check))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
