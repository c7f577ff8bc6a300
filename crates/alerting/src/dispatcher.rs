//! Event/effect dispatch

use crate::alarm::{Alarm, AlarmState};
use fatigue::{AlertLevel, DetectionStats};
use serde::{Deserialize, Serialize};
use storage::{EventKind, EventLog, FatigueEvent};
use tokio::time::{Duration, Instant};
use tracing::{info, warn};

/// Dispatcher configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Minimum wall-clock interval between persisted events (milliseconds)
    pub event_interval_ms: u64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            event_interval_ms: 5000,
        }
    }
}

/// Turns alert-level transitions into side effects: alarm commands and
/// throttled event persistence.
///
/// Persistence is a leaky-bucket throttle gated purely on elapsed time
/// since the last persisted event, independent of how many CRITICAL frames
/// occurred in between. The dispatcher returns nothing to the pipeline;
/// failed effects are logged and dropped.
pub struct EventDispatcher {
    config: DispatchConfig,
    alarm: Alarm,
    last_persisted: Option<Instant>,
}

impl EventDispatcher {
    pub fn new(config: DispatchConfig, alarm: Alarm) -> Self {
        Self {
            config,
            alarm,
            last_persisted: None,
        }
    }

    /// Evaluate one detection snapshot
    pub fn dispatch(&mut self, stats: &DetectionStats, log: &EventLog) {
        match stats.level {
            AlertLevel::Critical => {
                self.alarm.start();
                self.maybe_persist(stats, log);
            }
            AlertLevel::Warning | AlertLevel::Normal => {
                self.alarm.stop();
            }
        }
    }

    /// Silence the alarm outside the per-frame path (dismiss, session stop)
    pub fn silence(&mut self) {
        self.alarm.stop();
    }

    pub fn alarm_state(&self) -> AlarmState {
        self.alarm.state()
    }

    fn maybe_persist(&mut self, stats: &DetectionStats, log: &EventLog) {
        let interval = Duration::from_millis(self.config.event_interval_ms);
        let window_open = match self.last_persisted {
            Some(at) => at.elapsed() > interval,
            None => true,
        };

        if !window_open {
            return;
        }

        self.last_persisted = Some(Instant::now());
        let event = FatigueEvent::new(EventKind::Drowsiness, stats.fatigue_score);
        info!(id = %event.id, severity = event.severity, "persisting fatigue event");

        if let Err(e) = log.append(event) {
            warn!("fatigue event dropped: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn critical_stats(score: f32) -> DetectionStats {
        DetectionStats {
            ear: 0.10,
            mar: 0.1,
            fatigue_score: score,
            is_drowsy: true,
            is_yawning: false,
            level: AlertLevel::Critical,
            ..Default::default()
        }
    }

    fn normal_stats() -> DetectionStats {
        DetectionStats {
            ear: 0.30,
            fatigue_score: 10.0,
            level: AlertLevel::Normal,
            ..Default::default()
        }
    }

    fn dispatcher() -> EventDispatcher {
        EventDispatcher::new(DispatchConfig::default(), Alarm::silent())
    }

    #[tokio::test(start_paused = true)]
    async fn test_critical_starts_alarm_and_persists() {
        let mut dispatcher = dispatcher();
        let log = EventLog::with_default_capacity();

        dispatcher.dispatch(&critical_stats(85.0), &log);

        assert_eq!(dispatcher.alarm_state(), AlarmState::Playing);
        let events = log.list().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].severity, 85.0);
        assert_eq!(events[0].kind, EventKind::Drowsiness);
    }

    #[tokio::test(start_paused = true)]
    async fn test_persistence_throttle_window() {
        let mut dispatcher = dispatcher();
        let log = EventLog::with_default_capacity();

        // A continuous CRITICAL run at frame rate: one event per window
        for _ in 0..40 {
            dispatcher.dispatch(&critical_stats(90.0), &log);
            tokio::time::advance(Duration::from_millis(100)).await;
        }
        assert_eq!(log.len(), 1);

        tokio::time::advance(Duration::from_millis(1100)).await;
        dispatcher.dispatch(&critical_stats(95.0), &log);
        assert_eq!(log.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_throttle_is_wall_clock_not_frame_count() {
        let mut dispatcher = dispatcher();
        let log = EventLog::with_default_capacity();

        dispatcher.dispatch(&critical_stats(85.0), &log);
        // A single frame after the window elapses still persists
        tokio::time::advance(Duration::from_millis(5001)).await;
        dispatcher.dispatch(&critical_stats(85.0), &log);

        assert_eq!(log.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_warning_and_normal_stop_alarm() {
        let mut dispatcher = dispatcher();
        let log = EventLog::with_default_capacity();

        dispatcher.dispatch(&critical_stats(85.0), &log);
        assert_eq!(dispatcher.alarm_state(), AlarmState::Playing);

        let mut warning = critical_stats(70.0);
        warning.level = AlertLevel::Warning;
        dispatcher.dispatch(&warning, &log);
        assert_eq!(dispatcher.alarm_state(), AlarmState::Stopped);

        dispatcher.dispatch(&normal_stats(), &log);
        assert_eq!(dispatcher.alarm_state(), AlarmState::Stopped);
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_critical_levels_persist_nothing() {
        let mut dispatcher = dispatcher();
        let log = EventLog::with_default_capacity();

        for _ in 0..10 {
            dispatcher.dispatch(&normal_stats(), &log);
            tokio::time::advance(Duration::from_secs(10)).await;
        }
        assert!(log.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_silence_stops_alarm() {
        let mut dispatcher = dispatcher();
        let log = EventLog::with_default_capacity();

        dispatcher.dispatch(&critical_stats(85.0), &log);
        dispatcher.silence();
        assert_eq!(dispatcher.alarm_state(), AlarmState::Stopped);
    }
}
