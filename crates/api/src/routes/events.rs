//! Fatigue event log routes

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;
use storage::FatigueEvent;
use tracing::warn;

use crate::AppState;

/// Response for the events endpoint
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub data: Vec<FatigueEvent>,
    pub count: usize,
}

/// Retained fatigue events, newest first
pub async fn list_events(
    State(state): State<Arc<AppState>>,
) -> Result<Json<EventResponse>, StatusCode> {
    match state.events.list() {
        Ok(data) => {
            let count = data.len();
            Ok(Json(EventResponse { data, count }))
        }
        Err(e) => {
            warn!("event log read failed: {e}");
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// Drop all retained fatigue events
pub async fn clear_events(State(state): State<Arc<AppState>>) -> StatusCode {
    match state.events.clear() {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(e) => {
            warn!("event log clear failed: {e}");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
