//! Landmark ingest route

use axum::{extract::State, http::StatusCode, Json};
use face_metrics::LandmarkFrame;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::AppState;

/// Response for landmark ingest
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    /// False when the frame was dropped because the session is behind
    pub accepted: bool,
}

/// Feed one landmark frame to the monitoring session.
///
/// Frames arriving faster than the inference cadence are dropped rather
/// than queued; a drop is not an error.
pub async fn ingest(
    State(state): State<Arc<AppState>>,
    Json(frame): Json<LandmarkFrame>,
) -> (StatusCode, Json<IngestResponse>) {
    let accepted = state.frames_tx.try_send(frame).is_ok();
    if !accepted {
        debug!("landmark frame dropped, ingest channel full or closed");
    }
    (StatusCode::ACCEPTED, Json(IngestResponse { accepted }))
}
