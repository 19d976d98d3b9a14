//! Workload summary handler.

use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::observability::stats::StatsSnapshot;
use crate::server::ServerState;

/// Handle `GET /metrics`.
///
/// Reports the error rate as `errors / successes * 100` alongside the
/// accumulated slow-endpoint delay. With zero successes the rate is
/// undefined and reported as `null` rather than faulting.
pub async fn handle_metrics_summary(
    State(state): State<Arc<ServerState>>,
) -> Json<StatsSnapshot> {
    Json(state.stats.snapshot())
}
