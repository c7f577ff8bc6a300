//! Alarm control route

use axum::{extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::warn;

use crate::AppState;

/// Manually dismiss the alarm: silences it, resets the level to NORMAL,
/// and forces the fatigue score back to 0
pub async fn dismiss(State(state): State<Arc<AppState>>) -> StatusCode {
    match state.monitor.dismiss().await {
        Ok(()) => StatusCode::ACCEPTED,
        Err(e) => {
            warn!("dismiss failed: {e}");
            StatusCode::CONFLICT
        }
    }
}
