//! Synthetic workload handlers: latency, fault, memory, and CPU pressure.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::server::ServerState;
use crate::service::ServiceError;
use crate::workload::{cpu, delay, fault, memory};

/// Response of the slow endpoint.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SlowReport {
    /// The delay served, in seconds. Always in [0.5, 3.0).
    pub delay: f64,
}

/// Response of the error endpoint on the success path.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FaultOutcome {
    pub status: &'static str,
}

/// Response of the memory endpoint.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MemoryReport {
    pub processed: usize,
}

/// Query parameters of the CPU endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CpuParams {
    /// Seconds to burn. Defaults to 30 like the original demo.
    #[serde(default = "default_burn_secs")]
    pub duration: u64,
}

fn default_burn_secs() -> u64 {
    30
}

/// Response of the CPU endpoint.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CpuReport {
    pub burned_secs: u64,
    pub iterations: u64,
}

/// Handle `GET /slow`.
///
/// Draws a uniform delay in [0.5, 3.0) seconds, sleeps for it (async, so
/// no runtime thread is held), then adds it to the accumulator.
#[tracing::instrument(skip(state))]
pub async fn handle_slow(State(state): State<Arc<ServerState>>) -> Json<SlowReport> {
    let delay_secs = {
        let mut rng = rand::thread_rng();
        delay::draw_delay(&mut rng)
    };

    tokio::time::sleep(delay::to_duration(delay_secs)).await;
    state.stats.record_delay(delay_secs);

    tracing::info!(delay_secs, "Slow endpoint completed");
    Json(SlowReport { delay: delay_secs })
}

/// Handle `GET /error`.
///
/// Fails with probability 0.3. The fault is an explicit result variant
/// surfaced as a 500 by the central mapping layer; the counters record
/// which way the draw went.
#[tracing::instrument(skip(state))]
pub async fn handle_error(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<FaultOutcome>, ServiceError> {
    let faulted = {
        let mut rng = rand::thread_rng();
        fault::draw_fault(&mut rng)
    };

    if faulted {
        state.stats.record_error();
        tracing::error!("Injecting simulated fault");
        return Err(ServiceError::SimulatedFault);
    }

    state.stats.record_success();
    Ok(Json(FaultOutcome { status: "success" }))
}

/// Handle `GET /memory`.
///
/// Allocates ten million integers on a blocking worker to spike resident
/// memory, then reports the exact count processed.
pub async fn handle_memory() -> Result<Json<MemoryReport>, ServiceError> {
    tracing::warn!("Starting memory intensive operation - this may impact performance");

    let processed = tokio::task::spawn_blocking(memory::spike)
        .await
        .map_err(|e| ServiceError::Internal(e.to_string()))?;

    tracing::info!(processed, "Memory operation completed");
    Ok(Json(MemoryReport { processed }))
}

/// Handle `GET /cpu`.
///
/// Burns one blocking worker thread for the requested number of seconds.
pub async fn handle_cpu(
    Query(params): Query<CpuParams>,
) -> Result<Json<CpuReport>, ServiceError> {
    if params.duration > cpu::MAX_BURN_SECS {
        return Err(ServiceError::InvalidRequest(format!(
            "duration too long: {}s (max {}s)",
            params.duration,
            cpu::MAX_BURN_SECS
        )));
    }

    tracing::warn!(duration_secs = params.duration, "Starting CPU burn");
    let burn = Duration::from_secs(params.duration);
    let iterations = tokio::task::spawn_blocking(move || cpu::burn_for(burn))
        .await
        .map_err(|e| ServiceError::Internal(e.to_string()))?;

    Ok(Json(CpuReport {
        burned_secs: params.duration,
        iterations,
    }))
}
