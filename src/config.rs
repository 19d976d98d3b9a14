//! Configuration parsing for the Pulsecheck server.
//!
//! Supports:
//! - CLI arguments via clap
//! - Environment variable overrides
//! - Sensible defaults for quick start

use clap::Parser;
use std::path::PathBuf;

/// Pulsecheck: a synthetic-workload HTTP service for exercising observability pipelines.
#[derive(Parser, Debug, Clone)]
#[command(name = "pulsecheck")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Host address to bind to
    #[arg(long, env = "PULSECHECK_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PULSECHECK_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// OpenTelemetry collector endpoint for metrics export (optional)
    #[arg(long, env = "OTEL_EXPORTER_OTLP_ENDPOINT")]
    pub otel_endpoint: Option<String>,

    /// Application version reported by the /info endpoint
    #[arg(long, env = "APPLICATION_VERSION", default_value = "v0.0.1")]
    pub app_version: String,

    /// Deployment environment reported by the /info endpoint
    #[arg(long, env = "ENVIRONMENT", default_value = "LOCAL")]
    pub environment: String,

    /// Fallback quote-store connection string (SQLite path) used when no
    /// vault secret is configured
    #[arg(long, env = "DATABASE_CONNECTION", default_value = "./data/quotes.db")]
    pub database: PathBuf,

    /// Vault name to resolve secrets from (optional)
    #[arg(long, env = "KV_NAME")]
    pub kv_name: Option<String>,

    /// Name of the vault secret holding the quote-store connection string
    /// (optional)
    #[arg(long, env = "DB_SECRET_NAME")]
    pub db_secret_name: Option<String>,
}

impl Config {
    /// Parse configuration from CLI arguments and environment.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create a default configuration for testing.
    #[cfg(test)]
    pub fn test_config(database: PathBuf) -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 0, // Random port
            log_level: "debug".into(),
            otel_endpoint: None,
            app_version: "v0.0.1-test".into(),
            environment: "TEST".into(),
            database,
            kv_name: None,
            db_secret_name: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            log_level: "info".into(),
            otel_endpoint: None,
            app_version: "v0.0.1".into(),
            environment: "LOCAL".into(),
            database: PathBuf::from("./data/quotes.db"),
            kv_name: None,
            db_secret_name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.environment, "LOCAL");
        assert!(config.otel_endpoint.is_none());
    }

    #[test]
    fn test_config_without_vault_has_no_secret_name() {
        let config = Config::test_config(PathBuf::from("/tmp/test.db"));
        assert!(config.kv_name.is_none());
        assert!(config.db_secret_name.is_none());
    }
}
