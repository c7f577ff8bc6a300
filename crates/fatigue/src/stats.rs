//! Detection snapshot types

use crate::classifier::AlertLevel;
use serde::{Deserialize, Serialize};

/// Head tilt angles in degrees.
///
/// Carried for forward compatibility with pose estimation; always zero in
/// this pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadTilt {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

/// Immutable per-update snapshot of the detection pipeline's outputs.
///
/// Produced once per throttled update and handed to UI/storage consumers;
/// never retained or mutated by the pipeline itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionStats {
    /// Two-eye mean Eye Aspect Ratio
    pub ear: f32,

    /// Mouth Aspect Ratio
    pub mar: f32,

    /// Fatigue score, within [0, 100]
    pub fatigue_score: f32,

    /// EAR below the drowsy threshold this frame
    pub is_drowsy: bool,

    /// MAR above the yawn threshold this frame
    pub is_yawning: bool,

    /// Alert level derived from the fatigue score
    pub level: AlertLevel,

    /// Head tilt placeholder, always zero
    pub tilt: HeadTilt,
}
