//! Log capture for the in-app diagnostics surface.
//!
//! This module provides a logger implementation that retains the most recent
//! log entries in memory so the diagnostics screen can display them without
//! any file or terminal plumbing.

use log::{Level, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Number of formatted entries retained by default.
pub const CAPTURE_CAPACITY: usize = 256;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Logger that retains a bounded buffer of recent entries for the
/// diagnostics view. Oldest entries are dropped first once the buffer is
/// full.
///
pub struct DiagnosticsLogger {
    entries: Mutex<VecDeque<String>>,
    capacity: usize,
}

impl DiagnosticsLogger {
    pub fn new() -> DiagnosticsLogger {
        DiagnosticsLogger::with_capacity(CAPTURE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> DiagnosticsLogger {
        DiagnosticsLogger {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Snapshot of the retained entries, oldest first.
    ///
    pub fn recent(&self) -> Vec<String> {
        match self.entries.lock() {
            Ok(entries) => entries.iter().cloned().collect(),
            // A poisoned lock means a panic mid-append; nothing to show
            Err(_) => Vec::new(),
        }
    }
}

impl Default for DiagnosticsLogger {
    fn default() -> DiagnosticsLogger {
        DiagnosticsLogger::new()
    }
}

impl Log for DiagnosticsLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        // Allow all logs
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if self.capacity == 0 {
            return;
        }
        // If the lock fails the entry is dropped; capture is non-critical
        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() == self.capacity {
                entries.pop_front();
            }
            entries.push_back(format_log(record));
        }
    }

    fn flush(&self) {
        // No-op
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_log_contains_level_and_message() {
        let formatted = format_log(
            &Record::builder()
                .args(format_args!("starting session"))
                .level(Level::Info)
                .build(),
        );
        assert!(formatted.contains("INFO"));
        assert!(formatted.contains("starting session"));
    }

    #[test]
    fn test_recent_returns_entries_in_order() {
        let logger = DiagnosticsLogger::new();
        logger.log(
            &Record::builder()
                .args(format_args!("first"))
                .level(Level::Debug)
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("second"))
                .level(Level::Debug)
                .build(),
        );

        let recent = logger.recent();
        assert_eq!(recent.len(), 2);
        assert!(recent[0].contains("first"));
        assert!(recent[1].contains("second"));
    }

    #[test]
    fn test_capacity_drops_oldest_first() {
        let logger = DiagnosticsLogger::with_capacity(2);
        for message in ["one", "two", "three"] {
            logger.log(
                &Record::builder()
                    .args(format_args!("{}", message))
                    .level(Level::Debug)
                    .build(),
            );
        }

        let recent = logger.recent();
        assert_eq!(recent.len(), 2);
        assert!(recent[0].contains("two"));
        assert!(recent[1].contains("three"));
    }

    #[test]
    fn test_zero_capacity_retains_nothing() {
        let logger = DiagnosticsLogger::with_capacity(0);
        logger.log(
            &Record::builder()
                .args(format_args!("dropped"))
                .level(Level::Debug)
                .build(),
        );
        assert!(logger.recent().is_empty());
    }
}
