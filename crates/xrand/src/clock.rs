//! Clock abstraction used for the degraded seeding path.

use chrono::{DateTime, Utc};

/// Abstraction over wall-clock time.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;

    /// Nanoseconds since the Unix epoch, or whole seconds when the current
    /// time lies outside the range `i64` nanoseconds can represent.
    fn unix_nanos(&self) -> i64 {
        let now = self.now();
        now.timestamp_nanos_opt().unwrap_or_else(|| now.timestamp())
    }
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    struct At(DateTime<Utc>);

    impl Clock for At {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn test_unix_nanos_in_range() {
        let clock = At(Utc.timestamp_opt(1_700_000_000, 5).unwrap());
        assert_eq!(clock.unix_nanos(), 1_700_000_000_000_000_005);
    }

    #[test]
    fn test_unix_nanos_out_of_range_uses_seconds() {
        let clock = At(Utc.with_ymd_and_hms(3000, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(clock.unix_nanos(), clock.0.timestamp());
    }

    #[test]
    fn test_system_clock_is_after_epoch() {
        assert!(SystemClock.unix_nanos() > 0);
    }
}
