//! City Lookup - A caching front for a geocoding API
//!
//! Serves city lookups and typeahead suggestions over HTTP from an in-memory
//! cache warmed with popular cities.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use city_lookup::api::{create_router, AppState};
use city_lookup::{spawn_preload_task, Config, LocationCache, OpenWeatherGeocoder};

/// Main entry point for the city lookup server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the geocoding client and the lookup cache
/// 4. Start the popular city preload task
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "city_lookup=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting City Lookup Server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: api_url={}, ttl={}s, max_entries={}, port={}, preload_on_start={}",
        config.api_url,
        config.cache_ttl_secs,
        config.max_entries,
        config.server_port,
        config.preload_on_start
    );

    let geocoder = OpenWeatherGeocoder::new(
        config.api_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )
    .context("failed to build geocoding client")?;
    let cache = Arc::new(LocationCache::from_config(&config, Arc::new(geocoder)));
    let api_key: Arc<str> = Arc::from(config.api_key.as_str());
    info!("Location cache initialized");

    let preload_handle = config.preload_on_start.then(|| {
        spawn_preload_task(cache.clone(), api_key.clone(), config.preload_interval_secs)
    });

    let app = create_router(AppState::new(cache, api_key));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(preload_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the preload task if it is still running.
async fn shutdown_signal(preload_handle: Option<tokio::task::JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
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
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = preload_handle {
        if !handle.is_finished() {
            handle.abort();
            warn!("Preload task aborted");
        }
    }
}
