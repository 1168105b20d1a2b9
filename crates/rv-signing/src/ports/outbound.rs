//! # Outbound Ports (Driven Ports / SPI)
//!
//! Traits that define dependencies this subsystem needs: a source of the
//! current time and a sink for diagnostics.

use chrono::{DateTime, Utc};
use tracing::Level;

/// Source of "now" for intermediate key expiration checks.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Sink for verification diagnostics.
///
/// Injected rather than global so the core stays testable without
/// capturing process-wide log output.
pub trait VerificationLogger: Send + Sync {
    /// Record one diagnostic message at `level`.
    fn log(&self, level: Level, message: &str);
}
