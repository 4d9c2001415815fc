//! Game event logging for replay and analysis

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use tracing::{error, info};

use crate::config::{ENABLE_EVENT_LOGGING, EVENT_LOG_FILE};
use crate::game::{Direction, Position};

/// Types of game events that can be logged
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// Player changed the snake's direction
    DirectionChanged { direction: Direction },
    /// The snake ate food
    FoodEaten { position: Position, score: u32 },
    /// The simulation was reinitialized
    Reset { grid_size: i32 },
}

/// Logged event with timestamp
#[derive(Debug, Serialize)]
struct LogEntry {
    /// Unix timestamp in milliseconds
    timestamp_ms: u128,
    /// The event data
    #[serde(flatten)]
    event: GameEvent,
}

/// Game event logger writing one JSON object per line.
/// Write failures are swallowed; logging must never take down the game.
pub struct EventLogger {
    writer: Option<Mutex<BufWriter<File>>>,
}

impl EventLogger {
    /// Create a new event logger, honoring the config gate
    pub fn new() -> Self {
        if !ENABLE_EVENT_LOGGING {
            info!("Event logging is disabled");
            return Self::disabled();
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(EVENT_LOG_FILE)
        {
            Ok(file) => {
                info!("Event logging enabled, writing to {}", EVENT_LOG_FILE);
                Self {
                    writer: Some(Mutex::new(BufWriter::new(file))),
                }
            }
            Err(e) => {
                error!("Failed to open event log file: {}", e);
                Self::disabled()
            }
        }
    }

    /// A logger that drops every event (also used in tests)
    pub fn disabled() -> Self {
        Self { writer: None }
    }

    /// Log a game event
    pub fn log(&self, event: GameEvent) {
        let Some(ref writer) = self.writer else {
            return;
        };

        let timestamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);

        let entry = LogEntry { timestamp_ms, event };

        if let Ok(mut w) = writer.lock() {
            if let Ok(json) = serde_json::to_string(&entry) {
                let _ = writeln!(w, "{}", json);
                let _ = w.flush();
            }
        }
    }
}

impl Default for EventLogger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::FoodEaten {
            position: Position::new(6, 5),
            score: 1,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""event":"food_eaten""#));
        assert!(json.contains(r#""score":1"#));
    }

    #[test]
    fn test_disabled_logger_is_silent() {
        let logger = EventLogger::disabled();
        // Must not panic or write anywhere
        logger.log(GameEvent::Reset { grid_size: 15 });
    }
}
