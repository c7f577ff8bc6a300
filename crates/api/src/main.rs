//! Drowsiness Monitor - Main Entry Point

use alerting::Alarm;
use api::{init_logging, run_server, AppState, Settings};
use monitor::{ChannelProvider, MonitorSession};
use std::sync::Arc;
use storage::EventLog;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    info!("=== Drowsiness Monitor v{} ===", env!("CARGO_PKG_VERSION"));

    let settings = Settings::load()?;
    info!("Settings loaded: listening on {}", settings.listen_addr);

    let events = Arc::new(EventLog::new(settings.event_capacity));
    let (frames_tx, provider) = ChannelProvider::new(settings.frame_buffer);

    // This deployment has no audio path; visual alerting over the API is
    // authoritative and the alarm commands are no-ops
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

    run_server(&settings.listen_addr, state).await
}
