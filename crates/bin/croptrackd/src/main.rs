//! # croptrackd — croptrack daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialize logging
//! - Open the `SQLite` connection pool and ensure the schema exists
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve until SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use croptrack_adapter_http_axum::state::AppState;
use croptrack_adapter_storage_sqlite_sqlx::{
    Config as DbConfig, SqliteFieldRepository, SqliteHarvestRepository, SqliteSowingRepository,
};
use croptrack_app::services::field_service::FieldService;
use croptrack_app::services::harvest_service::HarvestService;
use croptrack_app::services::sowing_service::SowingService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database; schema failures stop the process here.
    let db = DbConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await
    .inspect_err(|err| tracing::error!(error = %err, "failed to initialise database"))?;
    let pool = db.pool().clone();

    // Repositories
    let field_repo = SqliteFieldRepository::new(pool.clone());
    let sowing_repo = SqliteSowingRepository::new(pool.clone());
    let harvest_repo = SqliteHarvestRepository::new(pool);

    // Services
    let field_service = FieldService::new(field_repo.clone());
    let sowing_service = SowingService::new(sowing_repo, field_repo.clone());
    let harvest_service = HarvestService::new(harvest_repo, field_repo);

    // HTTP
    let state = AppState::new(field_service, sowing_service, harvest_service);
    let app = croptrack_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "croptrackd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("croptrackd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(%err, "failed to listen for ctrl-c");
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
                tracing::warn!(%err, "failed to listen for SIGTERM");
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

    tracing::info!("shutdown signal received");
}
