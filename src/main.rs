//! Cache Keys - Key inspection server
//!
//! Serves the physical cache keys this deployment builds, so operators can
//! find the memcached entry behind a logical key.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cache_keys::{api::create_router, spawn_stats_reporter, AppState, Config};

/// Main entry point for the key inspection server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Validate the key prefix and version (refuse to start if no key fits)
/// 4. Start background stats reporter
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cache_keys=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Cache Keys inspection server");

    // Load configuration from environment variables
    let config = Config::from_env().context("invalid configuration")?;
    info!(
        "Configuration loaded: key_prefix={:?}, key_version={}, port={}, stats_log_interval={}s",
        config.key_prefix, config.key_version, config.server_port, config.stats_log_interval
    );

    // Fail fast: a prefix that leaves no room for keys is a deployment error
    let state = AppState::from_config(&config).context("invalid key configuration")?;
    info!("Key builder ready, budget={} chars", state.builder.budget());

    // Start background stats reporter
    let reporter_handle = spawn_stats_reporter(state.stats.clone(), config.stats_log_interval);
    info!("Background stats reporter started");

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(reporter_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the stats reporter and allows graceful shutdown.
async fn shutdown_signal(reporter_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
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

    // Abort the stats reporter
    reporter_handle.abort();
    warn!("Stats reporter aborted");
}
