//! Drowsiness Monitor API Server
//!
//! REST surface over a running monitoring session: landmark ingest, live
//! detection snapshots, score history, the fatigue event log, and alarm
//! dismissal.

use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use face_metrics::LandmarkFrame;
use monitor::{MonitorHandle, MonitorUpdate};
use serde::Serialize;
use std::sync::Arc;
use storage::EventLog;
use tokio::sync::mpsc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod routes;
mod settings;

pub use settings::Settings;

/// Application state shared across handlers
pub struct AppState {
    /// Sender feeding the session's landmark provider
    pub frames_tx: mpsc::Sender<LandmarkFrame>,
    /// Handle to the running monitoring session
    pub monitor: MonitorHandle,
    /// Fatigue event log
    pub events: Arc<EventLog>,
    /// Version string
    pub version: String,
    /// Server start time
    pub start_time: std::time::Instant,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub session: String,
    pub event_count: usize,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/landmarks", post(routes::landmarks::ingest))
        .route("/api/v1/stats/live", get(routes::stats::get_live))
        .route("/api/v1/stats/history", get(routes::stats::get_history))
        .route(
            "/api/v1/events",
            get(routes::events::list_events).delete(routes::events::clear_events),
        )
        .route("/api/v1/alarm/dismiss", post(routes::alarm::dismiss))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let session = match state.monitor.latest() {
        MonitorUpdate::Idle => "idle",
        MonitorUpdate::NoSignal => "no_signal",
        MonitorUpdate::Stats(_) => "monitoring",
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp,
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        session: session.to_string(),
        event_count: state.events.len(),
    })
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server over an already-running session
pub async fn run_server(addr: &str, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = create_router(state);

    info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alerting::Alarm;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use monitor::{ChannelProvider, MonitorSession};
    use tower::ServiceExt;

    async fn test_router() -> Router {
        let settings = Settings::default();
        let events = Arc::new(EventLog::new(settings.event_capacity));
        let (frames_tx, provider) = ChannelProvider::new(settings.frame_buffer);
        let (session, handle) = MonitorSession::new(
            provider,
            settings.monitor.clone(),
            Alarm::silent(),
            events.clone(),
        );
        tokio::spawn(session.run());

        let state = Arc::new(AppState {
            frames_tx,
            monitor: handle,
            events,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        });
        create_router(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let router = test_router().await;
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["event_count"], 0);
    }

    #[tokio::test]
    async fn test_landmark_ingest_is_accepted() {
        let router = test_router().await;
        let payload = serde_json::json!({ "keypoints": [{ "x": 1.0, "y": 2.0 }] });
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/landmarks")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let json = body_json(response).await;
        assert_eq!(json["accepted"], true);
    }

    #[tokio::test]
    async fn test_events_endpoint_empty() {
        let router = test_router().await;
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/events")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["count"], 0);
    }

    #[tokio::test]
    async fn test_dismiss_reaches_running_session() {
        let router = test_router().await;
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/alarm/dismiss")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }
}
