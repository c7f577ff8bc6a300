//! Alert level classification

use crate::config::FatigueConfig;
use serde::{Deserialize, Serialize};

/// Graded alert level derived from the current fatigue score.
///
/// Re-derived on every update from the score alone; carries no memory of
/// previous levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertLevel {
    #[default]
    Normal,
    Warning,
    Critical,
}

/// Classify a fatigue score into an alert level.
///
/// CRITICAL iff `score > trigger`; WARNING iff
/// `trigger - gap < score <= trigger`; NORMAL otherwise. The three ranges
/// partition [0, 100] with no gaps or overlaps.
pub fn classify(score: f32, config: &FatigueConfig) -> AlertLevel {
    if score > config.trigger_score {
        AlertLevel::Critical
    } else if score > config.warning_score() {
        AlertLevel::Warning
    } else {
        AlertLevel::Normal
    }
}

/// Diagnostic flag: eyes heavy-lidded or worse.
///
/// Independent of the score-based alert level; the two can disagree while
/// the score is still accumulating.
pub fn is_drowsy(ear: f32, config: &FatigueConfig) -> bool {
    ear < config.ear_drowsy
}

/// Diagnostic flag: mouth open wide enough to count as a yawn
pub fn is_yawning(mar: f32, config: &FatigueConfig) -> bool {
    mar > config.mar_yawn
}
