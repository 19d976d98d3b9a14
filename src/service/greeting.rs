//! Greeting and deployment-info handlers.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

use crate::server::ServerState;

/// Static greeting served by the root endpoint. Identical on every call.
pub const GREETING: &str = "Monitoring Demo App - OpenTelemetry Enabled and Reporting!";

/// Deployment information reported by the info endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub environment: String,
    pub version: String,
    pub database: String,
}

/// Handle `GET /` - static greeting, no side effects.
pub async fn handle_home() -> &'static str {
    tracing::info!("Home endpoint accessed");
    GREETING
}

/// Handle `GET /info` - deployment environment, version, and store DSN.
pub async fn handle_info(State(state): State<Arc<ServerState>>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        environment: state.environment.clone(),
        version: state.app_version.clone(),
        database: state.database_label.clone(),
    })
}
