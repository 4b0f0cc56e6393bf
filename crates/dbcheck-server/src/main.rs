use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use dbcheck_core::config::DbConfig;
use dbcheck_server::app_state::AppState;
use dbcheck_store::PgProbe;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let host = std::env::var("DBCHECK_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("DBCHECK_PORT").unwrap_or_else(|_| "3000".to_string());

    let db_config = DbConfig::from_env();
    tracing::debug!(?db_config, "Database configuration loaded");

    let state = AppState {
        probe: Arc::new(PgProbe::connect_lazy(&db_config)),
    };

    let app = dbcheck_server::router::create_router(state);

    let addr = format!("{host}:{port}");
    tracing::info!("dbcheck server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
