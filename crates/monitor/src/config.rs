//! Monitor configuration

use alerting::DispatchConfig;
use fatigue::FatigueConfig;
use serde::{Deserialize, Serialize};

/// Scheduling and pipeline configuration for a monitoring session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Minimum interval between landmark inferences (milliseconds)
    pub inference_interval_ms: u64,

    /// Minimum interval between snapshot notifications (milliseconds).
    /// Overridden whenever the score already exceeds the trigger threshold.
    pub notify_interval_ms: u64,

    /// Retained score-history points for dashboard charts
    pub history_capacity: usize,

    /// Ratio and alert thresholds
    pub fatigue: FatigueConfig,

    /// Alarm and persistence throttling
    pub dispatch: DispatchConfig,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            inference_interval_ms: 100,
            notify_interval_ms: 100,
            history_capacity: 50,
            fatigue: FatigueConfig::default(),
            dispatch: DispatchConfig::default(),
        }
    }
}
