//! Workload counter registry.
//!
//! The summary endpoint needs to *read* the three workload values, which
//! OpenTelemetry counters do not allow. This registry owns the canonical
//! process-lifetime values as lock-free atomics and mirrors every update to
//! the OpenTelemetry instruments. It is held in server state and handed to
//! handlers, never reached through ambient globals.
//!
//! Invariant: all three values only increase while the process runs.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::observability::metrics;

/// Thread-safe registry of the three workload telemetry values.
#[derive(Debug, Default)]
pub struct WorkloadStats {
    /// Accumulated slow-endpoint delay, stored as f64 bits.
    delay_bits: AtomicU64,
    /// Count of simulated errors.
    errors: AtomicU64,
    /// Count of successful error-endpoint calls.
    successes: AtomicU64,
}

/// Point-in-time view of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsSnapshot {
    /// `errors / successes * 100`, or `None` when no successes have been
    /// recorded yet (the ratio is undefined; reported as an explicit
    /// no-data indicator rather than a division fault).
    pub error_rate: Option<f64>,
    /// Accumulated slow-endpoint delay in seconds.
    pub total_delay: f64,
    /// Count of simulated errors.
    pub error_count: u64,
    /// Count of successful error-endpoint calls.
    pub success_count: u64,
}

impl WorkloadStats {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a served delay to the accumulator.
    ///
    /// Uses a compare-and-swap loop over the f64 bit representation so the
    /// accumulator never loses an update under concurrent increments.
    pub fn record_delay(&self, delay_seconds: f64) {
        let mut current = self.delay_bits.load(Ordering::Relaxed);
        loop {
            let updated = f64::from_bits(current) + delay_seconds;
            match self.delay_bits.compare_exchange_weak(
                current,
                updated.to_bits(),
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(actual) => current = actual,
            }
        }
        metrics::record_slow_delay(delay_seconds);
    }

    /// Record a simulated error.
    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
        metrics::record_simulated_error();
    }

    /// Record a successful error-endpoint call.
    pub fn record_success(&self) {
        self.successes.fetch_add(1, Ordering::Relaxed);
        metrics::record_error_endpoint_success();
    }

    /// Accumulated delay in seconds.
    pub fn total_delay(&self) -> f64 {
        f64::from_bits(self.delay_bits.load(Ordering::Relaxed))
    }

    /// Count of simulated errors.
    pub fn error_count(&self) -> u64 {
        self.errors.load(Ordering::Relaxed)
    }

    /// Count of successful error-endpoint calls.
    pub fn success_count(&self) -> u64 {
        self.successes.load(Ordering::Relaxed)
    }

    /// Take a point-in-time snapshot for the summary endpoint.
    pub fn snapshot(&self) -> StatsSnapshot {
        let error_count = self.error_count();
        let success_count = self.success_count();
        let error_rate = if success_count == 0 {
            None
        } else {
            Some(error_count as f64 / success_count as f64 * 100.0)
        };
        StatsSnapshot {
            error_rate,
            total_delay: self.total_delay(),
            error_count,
            success_count,
        }
    }
}
