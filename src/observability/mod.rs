//! OpenTelemetry observability infrastructure.
//!
//! Provides:
//! - Structured tracing setup
//! - OpenTelemetry metrics with optional OTLP export
//! - The workload counter registry backing the summary endpoint

pub mod metrics;
pub mod stats;
pub mod tracing;
