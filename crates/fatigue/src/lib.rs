//! Fatigue Scoring
//!
//! Temporal smoothing of eye/mouth openness ratios into a bounded 0-100
//! fatigue score, and threshold-based classification of that score into
//! graded alert levels:
//! - Asymmetric integrate-and-decay accumulator (slow rise, fast recovery)
//! - NORMAL / WARNING / CRITICAL classification with a hysteresis gap
//! - Per-update detection snapshots for downstream consumers

pub mod accumulator;
pub mod classifier;
pub mod config;
pub mod stats;

pub use accumulator::FatigueAccumulator;
pub use classifier::{classify, is_drowsy, is_yawning, AlertLevel};
pub use config::FatigueConfig;
pub use stats::{DetectionStats, HeadTilt};
