//! In-memory request log.
//!
//! Keeps every event in call order. Useful in tests and anywhere the log
//! needs to be inspected instead of printed.

use std::sync::{Mutex, MutexGuard, PoisonError};

use axum::http::{Method, StatusCode};

use crate::request_log::{LogEntry, RequestLog};

/// Request log that stores entries in memory.
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryLog {
    /// Create a new empty log.
    ///
    /// # Returns
    /// Returns a new `MemoryLog` with no entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all entries recorded so far, oldest first.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().clone()
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop all recorded entries.
    pub fn clear(&self) {
        self.lock().clear();
    }

    // A panic while holding the lock cannot leave the vector half-written.
    fn lock(&self) -> MutexGuard<'_, Vec<LogEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RequestLog for MemoryLog {
    fn request_started(&self, method: &Method, url: &str) {
        self.lock().push(LogEntry::Request { method: method.clone(), url: url.to_string() });
    }

    fn request_finished(&self, method: &Method, url: &str, status: StatusCode) {
        self.lock().push(LogEntry::Response {
            method: method.clone(),
            url: url.to_string(),
            status,
        });
    }
}
