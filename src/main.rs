use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};

use noteful_api::config;
use noteful_api::database::{DatabaseManager, FolderRepository};
use noteful_api::{app, is_production, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL
    let _ = dotenvy::dotenv();

    noteful_api::logging::init_tracing()?;

    let config = config::config();
    info!("Starting Noteful API in {:?} mode", config.environment);
    if is_production!() && config.security.cors_origins.is_empty() {
        warn!("CORS allows any origin in production");
    }

    let db = DatabaseManager::from_env(&config.database)
        .await
        .context("failed to connect to database")?;

    let folders = Arc::new(FolderRepository::new(db.pool().clone()));
    let state = AppState::new(folders, config.api.root_path.clone());
    let router = app(state, config);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("Noteful API listening on http://{}", bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
