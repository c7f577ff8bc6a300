//! Alerting System
//!
//! Side-effecting tail of the detection pipeline: idempotent alarm
//! start/stop driven by the alert level, and wall-clock-throttled fatigue
//! event persistence. Effects are fire-and-forget; collaborator failures
//! are contained here and never interrupt classification.

mod alarm;
mod dispatcher;

pub use alarm::{Alarm, AlarmBackend, AlarmError, AlarmState, SilentBackend};
pub use dispatcher::{DispatchConfig, EventDispatcher};
