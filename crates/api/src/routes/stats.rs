//! Detection stats routes

use axum::{extract::State, Json};
use monitor::{MonitorUpdate, ScorePoint};
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;

/// Response for the score history endpoint
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub data: Vec<ScorePoint>,
    pub count: usize,
}

/// Latest detection snapshot (or idle/no-signal status)
pub async fn get_live(State(state): State<Arc<AppState>>) -> Json<MonitorUpdate> {
    Json(state.monitor.latest())
}

/// Retained score history, oldest first
pub async fn get_history(State(state): State<Arc<AppState>>) -> Json<HistoryResponse> {
    let data = state.monitor.history();
    let count = data.len();
    Json(HistoryResponse { data, count })
}
