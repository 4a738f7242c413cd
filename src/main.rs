//! PetHub Server: pet-adoption backend with a suspicious-activity monitor.
//!
//! Main entry point that wires all crates together and starts the server.

use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use pethub_api::AppState;
use pethub_core::config::AppConfig;
use pethub_core::error::AppError;
use pethub_database::StoreManager;
use pethub_worker::{ActivityMonitor, MonitorScheduler};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load `config/default.toml`, the `PETHUB_ENV` overlay, and `PETHUB__*` variables.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("PETHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting PetHub");

    tracing::info!(backend = %config.store.backend, "Initializing stores");
    let stores = StoreManager::new(&config.store, &config.database).await?;

    let monitor_handle = if config.monitor.enabled {
        let monitor = ActivityMonitor::from_config(&config.monitor, &stores);
        tracing::info!(
            interval_secs = config.monitor.interval_seconds,
            window_secs = config.monitor.window_seconds,
            threshold = config.monitor.threshold,
            "Starting activity monitor"
        );
        Some(MonitorScheduler::spawn(monitor, &config.monitor))
    } else {
        tracing::info!("Activity monitor disabled");
        None
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let server_grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let app = pethub_api::build_app(AppState::new(config, stores.clone()));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;
    tracing::info!(%addr, "PetHub server listening");

    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    let served = server.await;

    tracing::info!("Waiting for background tasks to complete...");
    if let Some(handle) = monitor_handle {
        handle.shutdown().await;
    }
    if tokio::time::timeout(server_grace, stores.close()).await.is_err() {
        tracing::warn!("Store shutdown exceeded grace period");
    }

    served.map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("PetHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
