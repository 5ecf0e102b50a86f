// Eventstats API server
// Decision: PostgreSQL when DATABASE_URL is set, in-memory dev mode otherwise

use anyhow::{Context, Result};
use eventstats_server::{build_app, ServerConfig, StorageBackend};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "eventstats_server=debug,tower_http=debug";

#[tokio::main]
async fn main() -> Result<()> {
    // Optional .env for local development
    if let Ok(path) = dotenvy::dotenv() {
        eprintln!("Loaded environment from {}", path.display());
    }

    // RUST_LOG overrides the default filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    tracing::info!("eventstats-server starting...");

    let config = ServerConfig::from_env().context("Invalid configuration")?;

    let db = match &config.database_url {
        Some(url) => {
            let db = StorageBackend::postgres(url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database, migrations applied");
            db
        }
        None => {
            tracing::warn!(
                "DATABASE_URL not set, running in dev mode with in-memory storage \
                 (data is lost on restart)"
            );
            StorageBackend::in_memory()
        }
    };

    if !config.api_prefix.is_empty() {
        tracing::info!(prefix = %config.api_prefix, "API prefix configured");
    }

    let app = build_app(Arc::new(db), &config);

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("HTTP server listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
