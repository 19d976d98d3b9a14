//! Pulsecheck: a synthetic-workload HTTP service for exercising observability
//! pipelines.
//!
//! Pulsecheck exposes a handful of deliberately misbehaving endpoints (random
//! latency, random failure, memory and CPU pressure) together with the
//! instrumentation a monitoring backend needs to observe them: OpenTelemetry
//! metrics with optional OTLP export, structured tracing, and a JSON summary
//! endpoint.
//!
//! # Modules
//!
//! - [`config`]: CLI and environment configuration
//! - [`observability`]: Metrics, tracing, and the workload counter registry
//! - [`secrets`]: Minimal vault interface for credential retrieval
//! - [`server`]: HTTP server setup and lifecycle
//! - [`service`]: Endpoint handlers and error mapping
//! - [`storage`]: SQLite quote store (bootstrap demo data)
//! - [`workload`]: Latency, fault, memory, and CPU simulation primitives

// Lint configuration
#![warn(clippy::all)]
#![allow(
    clippy::module_name_repetitions,    // service::summary::SummaryReport is fine
    clippy::must_use_candidate,         // Not all functions need #[must_use]
    clippy::missing_errors_doc,         // Error docs can be verbose
    clippy::missing_panics_doc,         // Panic docs can be verbose
    clippy::needless_raw_string_hashes  // r#""# is fine for SQL
)]

pub mod config;
pub mod observability;
pub mod secrets;
pub mod server;
pub mod service;
pub mod storage;
pub mod workload;

use uuid::Uuid;

/// Generate a new UUIDv7 (time-sortable) identifier.
///
/// Used for seeded quote rows and request correlation; time-sortable IDs
/// keep insertion order visible in the store.
#[must_use]
pub fn generate_id() -> String {
    Uuid::now_v7().to_string()
}

/// Get the current Unix timestamp in milliseconds.
#[must_use]
pub fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before Unix epoch")
        .as_millis() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = generate_id();
        let b = generate_id();
        assert_eq!(a.len(), 36);
        assert_ne!(a, b);
    }

    #[test]
    fn test_now_millis_is_recent() {
        // After 2024-01-01 in millis.
        assert!(now_millis() > 1_704_067_200_000);
    }
}
