//! Fatigue score accumulator

use crate::config::FatigueConfig;
use tracing::debug;

/// Per-frame score delta when eyes are fully closed.
/// Calibrated so a normal blink (3-4 throttled frames) cannot alone cross
/// the trigger threshold, while sustained closure does within 1-2 seconds.
const CLOSED_DELTA: f32 = 5.0;

/// Per-frame score delta when eyes are heavy-lidded but not closed
const DROWSY_DELTA: f32 = 0.5;

/// Per-frame recovery when eyes are open; faster than the drowsy accrual
/// rate so opening the eyes rapidly suppresses false alarms
const RECOVERY_DELTA: f32 = -4.0;

/// Additional per-frame delta while yawning, independent of eye state
const YAWN_DELTA: f32 = 1.0;

/// Bounded 0-100 fatigue score, advanced once per processed frame.
///
/// Owned by the running session; reset to 0 on session stop or alarm
/// dismissal.
#[derive(Debug, Clone, Default)]
pub struct FatigueAccumulator {
    score: f32,
}

impl FatigueAccumulator {
    pub fn new() -> Self {
        Self { score: 0.0 }
    }

    /// Current score, always within [0, 100]
    pub fn score(&self) -> f32 {
        self.score
    }

    /// Advance the score by one frame's worth of eye/mouth state.
    ///
    /// The three eye-state branches are mutually exclusive (first match
    /// wins); the yawn penalty is additive regardless of which branch was
    /// taken. The result is clamped to [0, 100] and rounded to one decimal.
    pub fn update(&mut self, ear: f32, mar: f32, config: &FatigueConfig) -> f32 {
        let mut delta = if ear < config.ear_closed {
            CLOSED_DELTA
        } else if ear < config.ear_drowsy {
            DROWSY_DELTA
        } else {
            RECOVERY_DELTA
        };

        if mar > config.mar_yawn {
            delta += YAWN_DELTA;
        }

        self.score = ((self.score + delta).clamp(0.0, 100.0) * 10.0).round() / 10.0;
        debug!(ear, mar, delta, score = self.score, "fatigue score updated");
        self.score
    }

    /// Force the score back to 0 (session stop or alarm dismiss)
    pub fn reset(&mut self) {
        self.score = 0.0;
    }
}
