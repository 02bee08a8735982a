//! The game log: one human-readable line per successful operation.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single line of the game log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// Day on which it happened.
    pub day: u32,
    /// What happened.
    pub text: String,
    /// When it was recorded.
    pub timestamp: DateTime<Utc>,
}

/// A chronological log of session events.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct GameLog {
    entries: Vec<LogEntry>,
}

impl GameLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    pub fn record(&mut self, day: u32, text: impl Into<String>) {
        self.entries.push(LogEntry {
            day,
            text: text.into(),
            timestamp: Utc::now(),
        });
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// The most recent entry.
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Just the text of every entry, for comparing two runs.
    pub fn lines(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }
}
