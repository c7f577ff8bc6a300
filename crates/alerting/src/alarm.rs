//! Two-state alarm resource

use thiserror::Error;
use tracing::{info, warn};

/// Alarm backend errors
#[derive(Debug, Error)]
pub enum AlarmError {
    #[error("Audio backend failure: {0}")]
    Backend(String),
}

/// Playback state of the session's single alarm resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlarmState {
    #[default]
    Stopped,
    Playing,
}

/// Sink for alarm commands.
///
/// Implementations wrap whatever audio path the deployment has (or none);
/// the dispatcher never touches the underlying audio graph directly.
pub trait AlarmBackend: Send {
    fn play(&mut self) -> Result<(), AlarmError>;
    fn silence(&mut self) -> Result<(), AlarmError>;
}

/// No-op backend for headless deployments and tests
#[derive(Debug, Default)]
pub struct SilentBackend;

impl AlarmBackend for SilentBackend {
    fn play(&mut self) -> Result<(), AlarmError> {
        Ok(())
    }

    fn silence(&mut self) -> Result<(), AlarmError> {
        Ok(())
    }
}

/// Idempotent start/stop guard over an [`AlarmBackend`].
///
/// State tracks commanded intent: a backend failure is logged and the
/// commands degrade to no-ops, leaving visual alerting authoritative.
pub struct Alarm {
    backend: Box<dyn AlarmBackend>,
    state: AlarmState,
}

impl Alarm {
    pub fn new(backend: Box<dyn AlarmBackend>) -> Self {
        Self {
            backend,
            state: AlarmState::Stopped,
        }
    }

    pub fn silent() -> Self {
        Self::new(Box::new(SilentBackend))
    }

    pub fn state(&self) -> AlarmState {
        self.state
    }

    /// Start the alarm; a no-op when already playing
    pub fn start(&mut self) {
        if self.state == AlarmState::Playing {
            return;
        }
        self.state = AlarmState::Playing;
        info!("alarm started");
        if let Err(e) = self.backend.play() {
            warn!("alarm backend play failed: {e}");
        }
    }

    /// Stop the alarm; safe to call when already stopped
    pub fn stop(&mut self) {
        if self.state == AlarmState::Stopped {
            return;
        }
        self.state = AlarmState::Stopped;
        info!("alarm stopped");
        if let Err(e) = self.backend.silence() {
            warn!("alarm backend silence failed: {e}");
        }
    }
}
