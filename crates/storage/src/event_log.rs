//! Fatigue Event Log Implementation

use crate::StorageError;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

/// Maximum retained events (newest first, oldest evicted)
pub const DEFAULT_CAPACITY: usize = 50;

/// Category of a persisted fatigue event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventKind {
    Drowsiness,
    Yawn,
    Distraction,
}

/// A persisted fatigue event. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FatigueEvent {
    /// Unique event ID
    pub id: String,
    /// Creation time, epoch milliseconds
    pub timestamp_ms: i64,
    /// Event category
    pub kind: EventKind,
    /// Fatigue score at the moment the event fired
    pub severity: f32,
}

impl FatigueEvent {
    /// Create an event stamped with the current wall-clock time
    pub fn new(kind: EventKind, severity: f32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp_ms: chrono::Utc::now().timestamp_millis(),
            kind,
            severity,
        }
    }
}

/// Bounded, newest-first event log.
///
/// Interior mutability behind a mutex so the monitor task can append while
/// API handlers read; the log is advisory, not transactional.
pub struct EventLog {
    events: Mutex<VecDeque<FatigueEvent>>,
    capacity: usize,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            events: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Append an event, evicting the oldest if at capacity
    pub fn append(&self, event: FatigueEvent) -> Result<(), StorageError> {
        let mut events = self
            .events
            .lock()
            .map_err(|e| StorageError::Unavailable(format!("lock poisoned: {e}")))?;

        while events.len() >= self.capacity {
            events.pop_back();
        }

        debug!(id = %event.id, kind = ?event.kind, severity = event.severity, "event appended");
        events.push_front(event);
        Ok(())
    }

    /// All retained events, newest first
    pub fn list(&self) -> Result<Vec<FatigueEvent>, StorageError> {
        let events = self
            .events
            .lock()
            .map_err(|e| StorageError::Unavailable(format!("lock poisoned: {e}")))?;

        Ok(events.iter().cloned().collect())
    }

    /// Number of retained events
    pub fn len(&self) -> usize {
        self.events.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all retained events
    pub fn clear(&self) -> Result<(), StorageError> {
        let mut events = self
            .events
            .lock()
            .map_err(|e| StorageError::Unavailable(format!("lock poisoned: {e}")))?;

        events.clear();
        Ok(())
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_list() {
        let log = EventLog::with_default_capacity();
        log.append(FatigueEvent::new(EventKind::Drowsiness, 85.0))
            .unwrap();

        let events = log.list().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::Drowsiness);
        assert_eq!(events[0].severity, 85.0);
    }

    #[test]
    fn test_newest_first_ordering() {
        let log = EventLog::with_default_capacity();
        for severity in [81.0, 90.0, 95.0] {
            log.append(FatigueEvent::new(EventKind::Drowsiness, severity))
                .unwrap();
        }

        let events = log.list().unwrap();
        assert_eq!(events[0].severity, 95.0);
        assert_eq!(events[2].severity, 81.0);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let log = EventLog::new(5);
        for i in 0..10 {
            log.append(FatigueEvent::new(EventKind::Drowsiness, i as f32))
                .unwrap();
        }

        let events = log.list().unwrap();
        assert_eq!(events.len(), 5);
        assert_eq!(events[0].severity, 9.0);
        assert_eq!(events[4].severity, 5.0);
    }

    #[test]
    fn test_event_ids_are_unique() {
        let a = FatigueEvent::new(EventKind::Yawn, 50.0);
        let b = FatigueEvent::new(EventKind::Yawn, 50.0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_clear() {
        let log = EventLog::with_default_capacity();
        log.append(FatigueEvent::new(EventKind::Distraction, 70.0))
            .unwrap();
        log.clear().unwrap();
        assert!(log.is_empty());
    }
}
