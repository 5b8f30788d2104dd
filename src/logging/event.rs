//! Log event emitted by a running worker

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One line of worker output, immutable once emitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogEvent {
    /// Message text
    pub text: String,
    /// When the line was emitted
    pub timestamp: DateTime<Local>,
}

impl LogEvent {
    /// Create an event stamped with the current local time.
    pub fn now(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: Local::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event_serialization_roundtrip() {
        let event = LogEvent::now("logged in");
        let json = serde_json::to_string(&event).unwrap();
        let restored: LogEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, restored);
    }
}
