//! Health / heartbeat endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::error::ServerError;
use crate::state::AppState;
use crate::store::WorkoutStore;

/// Register health-check routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(get_health))
}

/// Heartbeat endpoint.
///
/// Returns `{"status": "ok", "version": "...", "workouts": <count>}` with HTTP 200.
/// A poisoned store surfaces as a 500 here too.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Server is healthy", body = Value),
        (status = 500, description = "Store unavailable"),
    )
)]
pub async fn get_health(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ServerError> {
    let workouts = state.store.len()?;
    Ok(Json(json!({
        "status":   "ok",
        "version":  env!("CARGO_PKG_VERSION"),
        "workouts": workouts,
    })))
}
