//! Where finished reports go: the host framework's logging subsystem, or a
//! stand-in for tests.

use std::sync::Mutex;

use crate::level::Level;

/// The only externally observable side effect of a report: one write per
/// resolved channel, after rendering completes.
pub trait LogSink: Send + Sync {
    fn write(&self, channel: &str, level: Level, message: &str);
}

/// Fallback sink writing `channel.LEVEL: message` lines to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write(&self, channel: &str, level: Level, message: &str) {
        eprintln!("{channel}.{}: {message}", level.as_upper_str());
    }
}

/// One captured sink write.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub channel: String,
    pub level: Level,
    pub message: String,
}

/// Captures writes in memory so tests can assert on what got logged.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    #[must_use]
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl LogSink for MemorySink {
    fn write(&self, channel: &str, level: Level, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(LogEntry {
                channel: channel.to_string(),
                level,
                message: message.to_string(),
            });
        }
    }
}
