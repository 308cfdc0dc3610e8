//! teamdraw server entry point.
//!
//! Starts the Axum HTTP server over the SQLite-backed roster.

use std::sync::Arc;
use std::time::Duration;

use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use teamdraw::api;
use teamdraw::app_state::AppState;
use teamdraw::config::AppConfig;
use teamdraw::persistence::PlayerStore;
use teamdraw::service::{DrawService, RosterService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting teamdraw");

    // Open the store and prepare the roster table
    let store = PlayerStore::connect(
        &config.database_url,
        config.database_max_connections,
        Duration::from_secs(config.database_connect_timeout_secs),
    )
    .await?;
    store.init_schema().await?;
    if config.seed_defaults && store.seed_defaults().await? {
        tracing::info!("seeded default roster");
    }

    // Build application state
    let app_state = AppState {
        roster_service: Arc::new(RosterService::new(store)),
        draw_service: Arc::new(DrawService::new(config.history_capacity)),
    };

    // Build router
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(10)))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
