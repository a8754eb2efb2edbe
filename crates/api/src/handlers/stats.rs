//! Handlers for dashboard aggregates and the status table.

use anken_core::status::{status_table, StatusInfo};
use anken_db::models::stats::AnkenStats;
use anken_db::repositories::AnkenRepo;
use axum::extract::State;
use axum::Json;

use crate::state::AppState;

/// GET /api/v1/stats
///
/// Recomputed from the full collection on every call.
pub async fn get_stats(State(state): State<AppState>) -> Json<AnkenStats> {
    Json(AnkenRepo::stats(&state.store).await)
}

/// GET /api/v1/statuses
pub async fn list_statuses() -> Json<Vec<StatusInfo>> {
    Json(status_table())
}
