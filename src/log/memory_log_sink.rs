use std::sync::{Mutex, PoisonError};

use crate::log::{
    log_level::LogLevel,
    log_msg::{LogMsg, LogPriority},
    log_sink::LogSink,
};

/// A rendered copy of one message that reached a [`MemoryLogSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLog {
    pub level: LogLevel,
    pub tag: String,
    pub priority: LogPriority,
    pub text: String,
}

/// Keeps every message in memory, in arrival order.
///
/// Meant for tests of code that logs; a mutex guards the buffer so it can be
/// shared between threads.
#[derive(Debug, Default)]
pub struct MemoryLogSink {
    entries: Mutex<Vec<CapturedLog>>,
}

impl MemoryLogSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything captured so far.
    #[must_use]
    pub fn entries(&self) -> Vec<CapturedLog> {
        self.lock().clone()
    }

    /// Drains the buffer.
    pub fn take(&self) -> Vec<CapturedLog> {
        std::mem::take(&mut *self.lock())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave the Vec half-written.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<CapturedLog>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogSink for MemoryLogSink {
    fn log(&self, msg: &LogMsg<'_>) {
        let entry = CapturedLog {
            level: msg.level,
            tag: msg.tag.to_string_lossy().into_owned(),
            priority: msg.priority,
            text: msg.args.to_string(),
        };
        self.lock().push(entry);
    }
}
