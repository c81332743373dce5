//! # BlogSite Server
//!
//! Session-authenticated blogging site: accounts register, log in, author
//! posts, and view either their own posts or the aggregate feed.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p blogsite-api
//! ```

use blogsite_api::app::{build_router, AppState};
use blogsite_api::config::Config;
use blogsite_shared::store::postgres::{PgStore, StoreConfig};
use std::sync::Arc;
use tower_sessions::MemoryStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blogsite_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("BlogSite v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;

    // Persistence service handle, created once and injected into handlers
    let store = PgStore::connect(StoreConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    })
    .await?;
    store.migrate().await?;

    // Session store lives in process memory; entries die with the server
    let session_store = MemoryStore::default();

    let bind_address = config.bind_address();
    let state = AppState::new(Arc::new(store), config);
    let app = build_router(state, session_store);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received, exiting...");
}
