//! Test clock — a stopped `Clock` for exercising the time-based seed.

use chrono::{DateTime, Utc};
use xrand::clock::Clock;

/// A clock stopped at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
