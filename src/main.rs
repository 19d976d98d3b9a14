//! Pulsecheck: a synthetic-workload HTTP service for exercising observability
//! pipelines.
//!
//! # Usage
//!
//! ```bash
//! pulsecheck --port 8080 --database ./data/quotes.db
//! ```
//!
//! Environment variables can also be used:
//! - `PULSECHECK_PORT`: Port to listen on
//! - `OTEL_EXPORTER_OTLP_ENDPOINT`: Metrics export endpoint
//! - `DATABASE_CONNECTION`: Quote store path (fallback when no vault is set)
//! - `KV_NAME` / `DB_SECRET_NAME`: Vault name and secret holding the store DSN
//! - `RUST_LOG`: Log level (trace, debug, info, warn, error)

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;

use pulsecheck::config::Config;
use pulsecheck::observability::metrics::init_metrics_with_endpoint;
use pulsecheck::observability::tracing::init_tracing;
use pulsecheck::secrets::{EnvVault, SecretStore};
use pulsecheck::server::{run_server, ServerState};
use pulsecheck::storage::QuoteStore;

/// Print startup banner with version and configuration.
fn print_banner(config: &Config) {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!(
        r#"
    ____        __                __              __
   / __ \__  __/ /_______  _____/ /_  ___  _____/ /__
  / /_/ / / / / / ___/ _ \/ ___/ __ \/ _ \/ ___/ //_/
 / ____/ /_/ / (__  )  __/ /__/ / / /  __/ /__/ ,<
/_/    \__,_/_/____/\___/\___/_/ /_/\___/\___/_/|_|

  Pulsecheck v{} - Synthetic Workload Service

  Configuration:
    Address:      {}:{}
    Environment:  {}
    App Version:  {}
    Log Level:    {}

  Press Ctrl+C to shutdown gracefully.
"#,
        version,
        config.host,
        config.port,
        config.environment,
        config.app_version,
        config.log_level
    );
}

/// Resolve the quote-store connection string.
///
/// Prefers the vault secret when vault name and secret name are both
/// configured; otherwise (or when the secret is missing) falls back to the
/// configured `DATABASE_CONNECTION` with a warning, per the degraded-mode
/// policy.
fn resolve_store_dsn(config: &Config) -> PathBuf {
    match (&config.kv_name, &config.db_secret_name) {
        (Some(vault_name), Some(secret_name)) => {
            let vault = EnvVault::new(vault_name.clone());
            match vault.fetch_secret(secret_name) {
                Ok(dsn) => PathBuf::from(dsn),
                Err(e) => {
                    tracing::warn!(error = %e, "Secret lookup failed, using fallback connection string");
                    config.database.clone()
                }
            }
        }
        _ => {
            tracing::warn!("WARNING! Vault not configured, using fallback connection string");
            config.database.clone()
        }
    }
}

/// Open and seed the quote store.
///
/// A failure here is not fatal: the service keeps running with the quote
/// endpoint disabled.
fn bootstrap_quote_store(dsn: &PathBuf) -> Option<QuoteStore> {
    if let Some(parent) = dsn.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(error = %e, "Failed to create store directory, quote endpoint disabled");
                return None;
            }
        }
    }

    match QuoteStore::open(dsn) {
        Ok(store) => match store.bootstrap() {
            Ok(seeded) => {
                tracing::info!(dsn = %dsn.display(), seeded, "Quote store ready");
                Some(store)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Quote store bootstrap failed, quote endpoint disabled");
                None
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "Failed to open quote store, quote endpoint disabled");
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse configuration from CLI arguments and environment
    let config = Config::parse_args();

    // Initialize tracing/logging
    init_tracing("pulsecheck");

    // Initialize metrics (with optional OTLP export; missing endpoint means
    // degraded, unexported mode)
    init_metrics_with_endpoint(config.otel_endpoint.as_deref());

    // Bootstrap the quote store (degrades to a disabled endpoint on failure)
    let dsn = resolve_store_dsn(&config);
    let quotes = bootstrap_quote_store(&dsn);

    // Print startup banner
    print_banner(&config);

    // Create shared state
    let state = Arc::new(ServerState::new(
        &config,
        quotes,
        dsn.display().to_string(),
    ));

    // Create shutdown signal channel
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Spawn signal handler task
    let shutdown_tx_clone = shutdown_tx.clone();
    tokio::spawn(async move {
        // Wait for SIGTERM or SIGINT (Ctrl+C)
        let ctrl_c = tokio::signal::ctrl_c();

        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            let mut sigterm =
                signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");

            tokio::select! {
                _ = ctrl_c => {
                    tracing::info!("Received SIGINT (Ctrl+C), initiating shutdown...");
                }
                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM, initiating shutdown...");
                }
            }
        }

        #[cfg(not(unix))]
        {
            ctrl_c.await.expect("failed to listen for ctrl+c");
            tracing::info!("Received Ctrl+C, initiating shutdown...");
        }

        // Signal shutdown
        let _ = shutdown_tx_clone.send(true);
    });

    // Run the server
    run_server(config, state, shutdown_rx).await?;

    tracing::info!("Pulsecheck shutdown complete");
    Ok(())
}
