//! Server settings

use monitor::MonitorConfig;
use serde::{Deserialize, Serialize};

/// Top-level settings, layered from an optional `monitor.toml` file and
/// `MONITOR_*` environment variables over the built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Bind address for the API server
    pub listen_addr: String,

    /// Capacity of the landmark ingest channel; frames beyond it are
    /// dropped, not buffered
    pub frame_buffer: usize,

    /// Maximum retained fatigue events
    pub event_capacity: usize,

    /// Session scheduling and pipeline thresholds
    pub monitor: MonitorConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            frame_buffer: 16,
            event_capacity: storage::DEFAULT_CAPACITY,
            monitor: MonitorConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from file and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("monitor").required(false))
            .add_source(
                config::Environment::with_prefix("MONITOR")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_tuned_constants() {
        let settings = Settings::default();
        assert_eq!(settings.event_capacity, 50);
        assert_eq!(settings.monitor.inference_interval_ms, 100);
        assert_eq!(settings.monitor.notify_interval_ms, 100);
        assert_eq!(settings.monitor.fatigue.ear_drowsy, 0.22);
        assert_eq!(settings.monitor.fatigue.ear_closed, 0.16);
        assert_eq!(settings.monitor.fatigue.mar_yawn, 0.5);
        assert_eq!(settings.monitor.fatigue.trigger_score, 80.0);
        assert_eq!(settings.monitor.dispatch.event_interval_ms, 5000);
    }

    #[test]
    fn test_load_without_sources_yields_defaults() {
        let settings = Settings::load().expect("defaults should deserialize");
        assert_eq!(settings.frame_buffer, 16);
    }
}
