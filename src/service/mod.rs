//! HTTP endpoint handlers for Pulsecheck.

pub mod greeting;
pub mod quotes;
pub mod summary;
pub mod workload;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::storage::StoreError;

/// Error type at the handler boundary.
///
/// Handlers return explicit `Result`s; this is the single mapping layer
/// that converts them to transport responses. Faults are values here, not
/// panics, even when they exist only to produce a 500.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Intentional fault injected by the error endpoint.
    #[error("Simulated error!")]
    SimulatedFault,

    /// Quote store was not configured at startup (degraded mode).
    #[error("quote store is not configured")]
    StoreDisabled,

    /// Quote store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Request asked for something out of range.
    #[error("{0}")]
    InvalidRequest(String),

    /// A blocking worker task failed.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    fn status(&self) -> StatusCode {
        match self {
            Self::SimulatedFault | Self::Store(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::StoreDisabled => StatusCode::SERVICE_UNAVAILABLE,
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_fault_maps_to_500() {
        let response = ServiceError::SimulatedFault.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_store_disabled_maps_to_503() {
        let response = ServiceError::StoreDisabled.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_invalid_request_maps_to_400() {
        let response = ServiceError::InvalidRequest("duration too long".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
