//! Logger implementations for the [`VerificationLogger`] port.

use parking_lot::Mutex;
use tracing::Level;

use crate::ports::outbound::VerificationLogger;

/// Forwards diagnostics to `tracing` under the `response_verification` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl VerificationLogger for TracingLogger {
    fn log(&self, level: Level, message: &str) {
        if level == Level::ERROR {
            tracing::error!(target: "response_verification", "{message}");
        } else if level == Level::WARN {
            tracing::warn!(target: "response_verification", "{message}");
        } else if level == Level::INFO {
            tracing::info!(target: "response_verification", "{message}");
        } else if level == Level::DEBUG {
            tracing::debug!(target: "response_verification", "{message}");
        } else {
            tracing::trace!(target: "response_verification", "{message}");
        }
    }
}

/// One captured diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
}

/// Keeps every diagnostic in memory for later inspection.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Whether a message containing `needle` was logged at `level`.
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.records
            .lock()
            .iter()
            .any(|r| r.level == level && r.message.contains(needle))
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl VerificationLogger for RecordingLogger {
    fn log(&self, level: Level, message: &str) {
        self.records.lock().push(LogRecord {
            level,
            message: message.to_string(),
        });
    }
}
