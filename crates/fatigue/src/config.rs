//! Fatigue scoring configuration

use serde::{Deserialize, Serialize};

/// Thresholds for ratio classification and alert levels.
///
/// Defaults are tuned for MediaPipe FaceMesh geometry at typical webcam
/// distances; all values are externally overridable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FatigueConfig {
    /// EAR below which eyes count as heavy-lidded
    pub ear_drowsy: f32,

    /// EAR below which eyes count as fully closed
    pub ear_closed: f32,

    /// MAR above which the mouth counts as yawning
    pub mar_yawn: f32,

    /// Score above which the alert level is CRITICAL
    pub trigger_score: f32,

    /// Gap below the trigger within which the level is WARNING.
    /// Hysteresis against jitter near the trigger boundary.
    pub warning_gap: f32,
}

impl Default for FatigueConfig {
    fn default() -> Self {
        Self {
            ear_drowsy: 0.22,
            ear_closed: 0.16,
            mar_yawn: 0.5,
            trigger_score: 80.0,
            warning_gap: 20.0,
        }
    }
}

impl FatigueConfig {
    /// Score at which WARNING begins
    pub fn warning_score(&self) -> f32 {
        self.trigger_score - self.warning_gap
    }
}
