//! Monitoring session loop

use crate::config::MonitorConfig;
use crate::provider::{LandmarkProvider, ProviderError};
use crate::MonitorError;
use alerting::{Alarm, EventDispatcher};
use face_metrics::{mean_eye_aspect_ratio, mouth_aspect_ratio, LandmarkFrame};
use fatigue::{classify, is_drowsy, is_yawning, AlertLevel};
use fatigue::{DetectionStats, FatigueAccumulator, HeadTilt};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use storage::EventLog;
use tokio::sync::{mpsc, watch};
use tokio::time::{self, Duration, Instant};
use tracing::{info, warn};

/// One point of score history for dashboard charts
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScorePoint {
    pub timestamp_ms: i64,
    pub score: f32,
}

/// Last-value snapshot published to downstream consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "stats", rename_all = "snake_case")]
pub enum MonitorUpdate {
    /// No session output yet, or session stopped
    Idle,
    /// Loop is live but no face was detected this cycle
    NoSignal,
    /// Fresh detection snapshot
    Stats(DetectionStats),
}

enum Command {
    Dismiss,
    Stop,
}

enum Tick {
    Command(Option<Command>),
    Inference(Result<Option<LandmarkFrame>, ProviderError>),
}

/// Control handle for a running [`MonitorSession`].
///
/// Cheap to clone; all accessors take `&self` so the handle can live in
/// shared application state.
#[derive(Clone)]
pub struct MonitorHandle {
    cmd_tx: mpsc::Sender<Command>,
    updates: watch::Receiver<MonitorUpdate>,
    history: Arc<Mutex<VecDeque<ScorePoint>>>,
}

impl MonitorHandle {
    /// Most recent update published by the session
    pub fn latest(&self) -> MonitorUpdate {
        self.updates.borrow().clone()
    }

    /// Subscribe to the last-value update slot
    pub fn updates(&self) -> watch::Receiver<MonitorUpdate> {
        self.updates.clone()
    }

    /// Retained score history, oldest first
    pub fn history(&self) -> Vec<ScorePoint> {
        self.history
            .lock()
            .map(|h| h.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Dismiss the alarm: silence it and force the score back to 0
    pub async fn dismiss(&self) -> Result<(), MonitorError> {
        self.cmd_tx
            .send(Command::Dismiss)
            .await
            .map_err(|_| MonitorError::SessionClosed)
    }

    /// Stop the session, cancelling any in-flight inference
    pub async fn stop(&self) -> Result<(), MonitorError> {
        self.cmd_tx
            .send(Command::Stop)
            .await
            .map_err(|_| MonitorError::SessionClosed)
    }
}

/// One monitoring session: a single ordered processing lane from landmark
/// frame to dispatched effects.
///
/// The score and throttle clocks live here and do not outlive a stop/start
/// cycle.
pub struct MonitorSession<P> {
    provider: P,
    config: MonitorConfig,
    accumulator: FatigueAccumulator,
    dispatcher: EventDispatcher,
    log: Arc<EventLog>,
    updates_tx: watch::Sender<MonitorUpdate>,
    cmd_rx: mpsc::Receiver<Command>,
    history: Arc<Mutex<VecDeque<ScorePoint>>>,
    last_notify: Option<Instant>,
}

impl<P: LandmarkProvider> MonitorSession<P> {
    pub fn new(
        provider: P,
        config: MonitorConfig,
        alarm: Alarm,
        log: Arc<EventLog>,
    ) -> (Self, MonitorHandle) {
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let (updates_tx, updates_rx) = watch::channel(MonitorUpdate::Idle);
        let history = Arc::new(Mutex::new(VecDeque::with_capacity(
            config.history_capacity,
        )));

        let handle = MonitorHandle {
            cmd_tx,
            updates: updates_rx,
            history: history.clone(),
        };

        let session = Self {
            dispatcher: EventDispatcher::new(config.dispatch.clone(), alarm),
            provider,
            config,
            accumulator: FatigueAccumulator::new(),
            log,
            updates_tx,
            cmd_rx,
            history,
            last_notify: None,
        };

        (session, handle)
    }

    /// Run the session until stopped or all handles are dropped.
    ///
    /// One frame is fully processed (metrics, score, classification,
    /// dispatch) before the next inference begins; the next deadline is
    /// measured from completion, so a slow inference shifts the cadence
    /// instead of queueing frames.
    pub async fn run(mut self) {
        info!("monitoring session started");
        let interval = Duration::from_millis(self.config.inference_interval_ms);
        let mut next_inference = Instant::now();

        loop {
            let idle_cmd = tokio::select! {
                cmd = self.cmd_rx.recv() => Some(cmd),
                _ = time::sleep_until(next_inference) => None,
            };

            if let Some(cmd) = idle_cmd {
                if self.handle_command(cmd) {
                    break;
                }
                continue;
            }

            // Inference tick; a command arriving mid-call cancels it
            let tick = tokio::select! {
                cmd = self.cmd_rx.recv() => Tick::Command(cmd),
                result = self.provider.estimate() => Tick::Inference(result),
            };

            match tick {
                Tick::Command(cmd) => {
                    if self.handle_command(cmd) {
                        break;
                    }
                }
                Tick::Inference(Ok(Some(frame))) => self.process_frame(&frame),
                Tick::Inference(Ok(None)) => {
                    // Keep the loop alive so the system recovers when a
                    // face reappears; the accumulator is left untouched
                    self.updates_tx.send_replace(MonitorUpdate::NoSignal);
                }
                Tick::Inference(Err(e)) => warn!("landmark provider error: {e}"),
            }

            next_inference = Instant::now() + interval;
        }

        self.dispatcher.silence();
        self.accumulator.reset();
        self.updates_tx.send_replace(MonitorUpdate::Idle);
        info!("monitoring session stopped");
    }

    /// Returns true when the session should shut down
    fn handle_command(&mut self, cmd: Option<Command>) -> bool {
        match cmd {
            Some(Command::Dismiss) => {
                self.dismiss();
                false
            }
            Some(Command::Stop) | None => true,
        }
    }

    fn process_frame(&mut self, frame: &LandmarkFrame) {
        let ear = mean_eye_aspect_ratio(frame);
        let mar = mouth_aspect_ratio(frame);

        let score = self.accumulator.update(ear, mar, &self.config.fatigue);
        let level = classify(score, &self.config.fatigue);

        let stats = DetectionStats {
            ear,
            mar,
            fatigue_score: score,
            is_drowsy: is_drowsy(ear, &self.config.fatigue),
            is_yawning: is_yawning(mar, &self.config.fatigue),
            level,
            tilt: HeadTilt::default(),
        };

        self.dispatcher.dispatch(&stats, &self.log);
        self.maybe_notify(stats);
    }

    fn maybe_notify(&mut self, stats: DetectionStats) {
        let interval = Duration::from_millis(self.config.notify_interval_ms);
        let due = match self.last_notify {
            Some(at) => at.elapsed() >= interval,
            None => true,
        };

        // The throttle never delays a score already past the trigger
        if !due && stats.fatigue_score <= self.config.fatigue.trigger_score {
            return;
        }

        self.last_notify = Some(Instant::now());
        self.push_history(stats.fatigue_score);
        self.updates_tx.send_replace(MonitorUpdate::Stats(stats));
    }

    fn push_history(&mut self, score: f32) {
        if let Ok(mut history) = self.history.lock() {
            while history.len() >= self.config.history_capacity {
                history.pop_front();
            }
            history.push_back(ScorePoint {
                timestamp_ms: chrono::Utc::now().timestamp_millis(),
                score,
            });
        }
    }

    fn dismiss(&mut self) {
        info!("alarm dismissed by user");
        self.dispatcher.silence();
        self.accumulator.reset();

        // Publish the cleared score right away instead of waiting a tick
        let cleared = match &*self.updates_tx.borrow() {
            MonitorUpdate::Stats(stats) => {
                let mut stats = stats.clone();
                stats.fatigue_score = 0.0;
                stats.level = AlertLevel::Normal;
                MonitorUpdate::Stats(stats)
            }
            other => other.clone(),
        };
        self.updates_tx.send_replace(cleared);
    }
}
