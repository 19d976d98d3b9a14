//! HTTP server setup and lifecycle.
//!
//! Builds the axum router with:
//! - Workload endpoint handlers
//! - Request-span tracing layer
//! - Liveness/readiness probes
//! - Graceful shutdown support

use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::observability::stats::WorkloadStats;
use crate::service::{greeting, quotes, summary, workload};
use crate::storage::QuoteStore;

/// Server state shared across handlers.
pub struct ServerState {
    /// Workload counter registry.
    pub stats: WorkloadStats,
    /// Quote store; `None` when bootstrap failed or was skipped (degraded mode).
    pub quotes: Option<QuoteStore>,
    /// Deployment environment label.
    pub environment: String,
    /// Application version label.
    pub app_version: String,
    /// Connection string reported by the info endpoint.
    pub database_label: String,
}

impl ServerState {
    /// Assemble state from configuration, an optional store, and the DSN the
    /// store was actually opened with.
    pub fn new(config: &Config, quotes: Option<QuoteStore>, database_label: String) -> Self {
        Self {
            stats: WorkloadStats::new(),
            quotes,
            environment: config.environment.clone(),
            app_version: config.app_version.clone(),
            database_label,
        }
    }
}

/// Create the application router.
pub fn build_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(greeting::handle_home))
        .route("/info", get(greeting::handle_info))
        .route("/slow", get(workload::handle_slow))
        .route("/error", get(workload::handle_error))
        .route("/memory", get(workload::handle_memory))
        .route("/cpu", get(workload::handle_cpu))
        .route("/metrics", get(summary::handle_metrics_summary))
        .route("/quotes", get(quotes::handle_quotes))
        .route("/health", get(handle_health))
        .route("/ready", get(handle_ready))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handle `GET /health` - basic liveness check.
async fn handle_health() -> &'static str {
    "OK"
}

/// Handle `GET /ready` - readiness check.
async fn handle_ready() -> &'static str {
    "READY"
}

/// Run the Pulsecheck HTTP server.
///
/// # Arguments
///
/// * `config` - Server configuration
/// * `state` - Shared server state
/// * `shutdown_rx` - Receiver for shutdown signal
///
/// # Returns
///
/// Returns when the server has shut down.
pub async fn run_server(
    config: Config,
    state: Arc<ServerState>,
    mut shutdown_rx: watch::Receiver<bool>,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Starting Pulsecheck HTTP server");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
            tracing::info!("Shutdown signal received, stopping server");
        })
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
