//! Monitoring Session
//!
//! Wraps the detection pipeline (metrics -> accumulator -> classifier ->
//! dispatcher) in a throttled frame scheduler:
//! - Landmark frames are pulled from a provider at a fixed inference cadence,
//!   measured from completion of the previous frame (late frames are
//!   dropped, never queued)
//! - Downstream consumers see a last-value snapshot slot refreshed at the
//!   notification cadence, bypassed immediately once the score exceeds the
//!   trigger threshold
//! - No-face ticks keep the loop alive without touching the accumulator
//! - Session stop cancels in-flight inference and silences the alarm

pub mod config;
pub mod provider;
pub mod session;

pub use config::MonitorConfig;
pub use provider::{ChannelProvider, LandmarkProvider, ProviderError};
pub use session::{MonitorHandle, MonitorSession, MonitorUpdate, ScorePoint};

use thiserror::Error;

/// Monitor errors
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("Monitoring session is not running")]
    SessionClosed,
}
