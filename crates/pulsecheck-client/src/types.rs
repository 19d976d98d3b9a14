//! Response types mirrored from the Pulsecheck HTTP surface.

use serde::{Deserialize, Serialize};

/// Response of `GET /slow`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct SlowReport {
    /// The delay served, in seconds.
    pub delay: f64,
}

/// Response of `GET /memory`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct MemoryReport {
    pub processed: u64,
}

/// Response of `GET /cpu`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct CpuReport {
    pub burned_secs: u64,
    pub iterations: u64,
}

/// Response of `GET /metrics`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct MetricsSummary {
    /// Error percentage, or `None` before the first success.
    pub error_rate: Option<f64>,
    /// Accumulated slow-endpoint delay in seconds.
    pub total_delay: f64,
    pub error_count: u64,
    pub success_count: u64,
}

/// Response of `GET /info`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceInfo {
    pub environment: String,
    pub version: String,
    pub database: String,
}

/// One row of `GET /quotes`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Quote {
    pub name: String,
    pub quote: String,
}

/// Outcome of one `GET /error` call.
///
/// A 500 from this endpoint is a *reported draw*, not a client failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FaultOutcome {
    /// The draw succeeded (HTTP 200).
    Success,
    /// The draw injected a fault (HTTP 500) with the reported message.
    Fault(String),
}

impl FaultOutcome {
    /// Whether this draw was a fault.
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Fault(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_summary_null_error_rate_deserializes() {
        let summary: MetricsSummary = serde_json::from_str(
            r#"{"error_rate":null,"total_delay":0.0,"error_count":0,"success_count":0}"#,
        )
        .unwrap();
        assert!(summary.error_rate.is_none());
    }

    #[test]
    fn test_fault_outcome_classification() {
        assert!(!FaultOutcome::Success.is_fault());
        assert!(FaultOutcome::Fault("Simulated error!".into()).is_fault());
    }
}
