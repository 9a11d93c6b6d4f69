//! Secure seeding of the shared generator.
//!
//! The seed is read once from the operating system's secure entropy source.
//! When that source fails, the current time is used instead. The fallback
//! weakens unpredictability but never fails the caller.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::clock::Clock;
use crate::error::RandomError;
use crate::rng::INT63_MASK;

/// A source of cryptographically secure bytes.
pub trait EntropySource {
    /// Fill `buf` entirely with secure random bytes.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::EntropyUnavailable` if the source cannot be read.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), RandomError>;
}

/// Entropy read from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), RandomError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| RandomError::EntropyUnavailable(e.to_string()))
    }
}

/// Derives a non-negative 63-bit seed.
///
/// Eight bytes are read from `entropy` and interpreted as a little-endian
/// `u64` with the top bit cleared. If `entropy` fails, the Unix time in
/// nanoseconds reported by `clock` is used instead.
pub fn derive_seed(entropy: &mut dyn EntropySource, clock: &dyn Clock) -> u64 {
    let mut bytes = [0u8; 8];
    match entropy.fill(&mut bytes) {
        Ok(()) => u64::from_le_bytes(bytes) & INT63_MASK,
        Err(e) => {
            tracing::warn!(error = %e, "secure seed unavailable, falling back to time-based seed");
            time_seed(clock)
        }
    }
}

#[allow(clippy::cast_sign_loss)]
fn time_seed(clock: &dyn Clock) -> u64 {
    (clock.unix_nanos() as u64) & INT63_MASK
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;

    struct BytesEntropy([u8; 8]);

    impl EntropySource for BytesEntropy {
        fn fill(&mut self, buf: &mut [u8]) -> Result<(), RandomError> {
            buf.copy_from_slice(&self.0);
            Ok(())
        }
    }

    struct BrokenEntropy;

    impl EntropySource for BrokenEntropy {
        fn fill(&mut self, _buf: &mut [u8]) -> Result<(), RandomError> {
            Err(RandomError::EntropyUnavailable("device missing".into()))
        }
    }

    struct StoppedClock(DateTime<Utc>);

    impl Clock for StoppedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn stopped_clock() -> StoppedClock {
        StoppedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
    }

    #[test]
    fn test_seed_is_little_endian() {
        let mut entropy = BytesEntropy([1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(derive_seed(&mut entropy, &stopped_clock()), 1);
    }

    #[test]
    fn test_seed_clears_sign_bit() {
        let mut entropy = BytesEntropy([0xFF; 8]);
        assert_eq!(derive_seed(&mut entropy, &stopped_clock()), INT63_MASK);
    }

    #[test]
    fn test_failing_entropy_falls_back_to_clock_nanos() {
        let clock = stopped_clock();
        let expected = clock.0.timestamp_nanos_opt().unwrap().unsigned_abs();
        assert_eq!(derive_seed(&mut BrokenEntropy, &clock), expected);
    }

    #[test]
    fn test_os_entropy_fills_buffer() {
        let mut first = [0u8; 32];
        let mut second = [0u8; 32];
        OsEntropy.fill(&mut first).unwrap();
        OsEntropy.fill(&mut second).unwrap();
        assert_ne!(first, second);
    }
}
