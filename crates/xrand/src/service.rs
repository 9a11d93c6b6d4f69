//! The random service: one seeded generator guarded by a mutex.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use crate::clock::{Clock, SystemClock};
use crate::rng::{RandomSource, StdRandomSource};
use crate::seed::{EntropySource, OsEntropy, derive_seed};

/// A pseudo-random generator safe for concurrent use.
///
/// Every draw takes the internal lock for exactly one call into the
/// underlying [`RandomSource`]; composed operations such as
/// [`jitter`](Self::jitter) and [`string`](Self::string) re-acquire it for
/// each draw instead of holding it across the whole operation.
pub struct RandomService {
    source: Mutex<Box<dyn RandomSource>>,
}

impl RandomService {
    /// Create a service seeded from the operating system's secure entropy,
    /// falling back to the system clock if that entropy is unavailable.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_parts(&mut OsEntropy, &SystemClock)
    }

    /// Create a service seeded from the given entropy source, using `clock`
    /// only if the entropy source fails.
    #[must_use]
    pub fn from_parts(entropy: &mut dyn EntropySource, clock: &dyn Clock) -> Self {
        let seed = derive_seed(entropy, clock);
        Self::with_source(StdRandomSource::from_seed(seed))
    }

    /// Create a service drawing from an arbitrary source.
    #[must_use]
    pub fn with_source(source: impl RandomSource + 'static) -> Self {
        Self {
            source: Mutex::new(Box::new(source)),
        }
    }

    /// Runs `f` against the source while holding the lock.
    ///
    /// A draw never leaves the source half-updated, so a lock poisoned by a
    /// panicking caller is still safe to reuse.
    fn draw<T>(&self, f: impl FnOnce(&mut dyn RandomSource) -> T) -> T {
        let mut guard = self.source.lock().unwrap_or_else(PoisonError::into_inner);
        f(guard.as_mut())
    }

    /// Draws a non-negative 63-bit integer.
    pub(crate) fn int63(&self) -> u64 {
        self.draw(|source| source.next_int63())
    }

    /// Generates a random integer in `[0, n)`.
    ///
    /// # Panics
    ///
    /// Panics if `n <= 0`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn int_n(&self, n: i64) -> i64 {
        assert!(n > 0, "invalid argument to int_n: n must be positive, got {n}");
        // The draw is below n, which itself fits in an i64.
        self.draw(|source| source.next_below(n.unsigned_abs())) as i64
    }

    /// Generates a random integer in `[min, max)`.
    ///
    /// # Panics
    ///
    /// Panics if `max <= min`.
    #[must_use]
    pub fn int_between(&self, min: i64, max: i64) -> i64 {
        assert!(
            max > min,
            "invalid argument to int_between: max must be greater than min, got [{min}, {max})"
        );
        let span = max.abs_diff(min);
        let offset = self.draw(|source| source.next_below(span));
        min.wrapping_add_unsigned(offset)
    }

    /// Generates a random `f64` in `[0.0, 1.0)`.
    #[must_use]
    pub fn float64(&self) -> f64 {
        self.draw(|source| source.next_f64())
    }
}

impl fmt::Debug for RandomService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomService").finish_non_exhaustive()
    }
}
