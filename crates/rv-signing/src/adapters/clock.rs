//! Clock implementations.

use chrono::{DateTime, Utc};

use crate::ports::outbound::Clock;

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to one instant.
///
/// Used to replay captured signatures whose intermediate key has since expired.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pin the clock to a request date in milliseconds since epoch.
    pub fn at_millis(millis: u64) -> Option<Self> {
        DateTime::from_timestamp_millis(i64::try_from(millis).ok()?).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
