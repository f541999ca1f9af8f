//! Combat state read by the overlay widgets

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

/// Maximum combat log entries to keep
pub const MAX_LOG_ENTRIES: usize = 50;

/// An entry in the combat log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogEntry {
    /// Bare message
    Text(String),
    /// Structured event from the combat system
    Record {
        #[serde(default)]
        turn: u32,
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        timestamp_ms: u64,
    },
}

impl LogEntry {
    /// Text shown for this entry
    pub fn display_text(&self) -> String {
        match self {
            LogEntry::Text(text) => text.clone(),
            LogEntry::Record {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            LogEntry::Record { turn, .. } => format!("[turn {}]", turn),
        }
    }
}

impl From<String> for LogEntry {
    fn from(text: String) -> Self {
        LogEntry::Text(text)
    }
}

impl From<&str> for LogEntry {
    fn from(text: &str) -> Self {
        LogEntry::Text(text.to_string())
    }
}

/// Insertion-ordered combat log, oldest entries dropped past the cap
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatLog {
    entries: VecDeque<LogEntry>,
}

impl CombatLog {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(MAX_LOG_ENTRIES),
        }
    }

    /// Build a log from existing entries, keeping the cap
    pub fn from_entries(entries: impl IntoIterator<Item = LogEntry>) -> Self {
        let mut log = Self::new();
        for entry in entries {
            log.push(entry);
        }
        log
    }

    /// Record a combat event for the given turn
    pub fn add_log(&mut self, turn: u32, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(turn, "[Combat Log] {}", message);
        self.push(LogEntry::Record {
            turn,
            message: Some(message),
            timestamp_ms: now_ms(),
        });
    }

    pub fn push(&mut self, entry: LogEntry) {
        if self.entries.len() >= MAX_LOG_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// The last `n` entries (fewer if the log is shorter), oldest first
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().skip(self.entries.len().saturating_sub(n))
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
