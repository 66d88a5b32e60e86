//! # innkeepd — innkeep daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Pick the hotel store: in-memory, or `SQLite` (pool + migrations)
//! - Construct the application service, injecting the store via the port trait
//! - Build the axum router, injecting the application service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use innkeep_adapter_http_axum::router;
use innkeep_adapter_http_axum::state::AppState;
use innkeep_adapter_storage_memory::InMemoryHotelRepository;
use innkeep_adapter_storage_sqlite_sqlx::SqliteHotelRepository;
use innkeep_app::ports::HotelRepository;
use innkeep_app::services::hotel_service::HotelService;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, StorageBackend};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    match config.storage.backend {
        StorageBackend::Memory => serve(InMemoryHotelRepository::new(), &config).await?,
        StorageBackend::Sqlite => {
            let db = innkeep_adapter_storage_sqlite_sqlx::Config {
                database_url: config.database_url().to_string(),
            }
            .build()
            .await?;
            serve(SqliteHotelRepository::new(db.pool().clone()), &config).await?;
        }
    }

    tracing::info!("innkeepd stopped");
    Ok(())
}

async fn serve<R>(repo: R, config: &Config) -> std::io::Result<()>
where
    R: HotelRepository + Send + Sync + 'static,
{
    let state = AppState::new(HotelService::new(repo));
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        backend = ?config.storage.backend,
        "innkeepd listening on http://{bind_addr}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Resolve once SIGINT or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received, draining connections");
}
