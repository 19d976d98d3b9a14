//! Quote listing handler.

use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::server::ServerState;
use crate::service::ServiceError;
use crate::storage::Quote;

/// Handle `GET /quotes`.
///
/// Returns the seeded quote rows. When the store was not configured at
/// startup the service runs degraded and this endpoint reports 503.
pub async fn handle_quotes(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<Vec<Quote>>, ServiceError> {
    let store = state.quotes.as_ref().ok_or(ServiceError::StoreDisabled)?;
    let rows = store.list_quotes()?;
    Ok(Json(rows))
}
