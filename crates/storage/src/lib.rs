//! Event Storage Layer
//!
//! Append-only fatigue event log, bounded and newest-first. Storage is
//! best-effort and advisory: persistence failures are reported to the
//! caller and must never gate alarm correctness.

mod event_log;

pub use event_log::{EventKind, EventLog, FatigueEvent, DEFAULT_CAPACITY};

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Event log unavailable: {0}")]
    Unavailable(String),
}
