//! xrand — securely seeded randomness utilities.
//!
//! A single process-wide pseudo-random generator, seeded once from the
//! operating system's secure entropy source and guarded by a mutex, backs a
//! handful of small operations: bounded integers, unit floats, duration
//! jitter and random strings.
//!
//! This is not a source of secrets: output is only as unpredictable as the
//! seed, and the generator itself is not cryptographically secure.
//!
//! ```
//! use std::time::Duration;
//!
//! let roll = xrand::int_between(1, 7);
//! assert!((1..7).contains(&roll));
//!
//! let ttl = xrand::jitter(Duration::from_secs(600), Some(0.1));
//! assert!(ttl >= Duration::from_secs(540) && ttl < Duration::from_secs(660));
//!
//! let id = xrand::string(16, Some(xrand::ALPHANUM_ALPHABET));
//! assert_eq!(id.len(), 16);
//! ```

use std::sync::OnceLock;
use std::time::Duration;

pub mod clock;
pub mod error;
pub mod jitter;
pub mod rng;
pub mod seed;
pub mod service;
pub mod string;

pub use jitter::DEFAULT_JITTER_FACTOR;
pub use service::RandomService;
pub use string::{ALPHANUM_ALPHABET, DIGITS_ALPHABET};

static SHARED: OnceLock<RandomService> = OnceLock::new();

/// Returns the process-wide service, seeding it on first use.
#[must_use]
pub fn shared() -> &'static RandomService {
    SHARED.get_or_init(|| {
        tracing::debug!("initialising shared random generator");
        RandomService::from_entropy()
    })
}

/// Generates a random integer in `[0, n)` from the shared generator.
///
/// # Panics
///
/// Panics if `n <= 0`.
#[must_use]
pub fn int_n(n: i64) -> i64 {
    shared().int_n(n)
}

/// Generates a random integer in `[min, max)` from the shared generator.
///
/// # Panics
///
/// Panics if `max <= min`.
#[must_use]
pub fn int_between(min: i64, max: i64) -> i64 {
    shared().int_between(min, max)
}

/// Generates a random `f64` in `[0.0, 1.0)` from the shared generator.
#[must_use]
pub fn float64() -> f64 {
    shared().float64()
}

/// Returns `duration` altered by up to `±factor` of itself using the shared
/// generator. See [`RandomService::jitter`].
#[must_use]
pub fn jitter(duration: Duration, factor: Option<f64>) -> Duration {
    shared().jitter(duration, factor)
}

/// Generates a random string of `length` symbols from `alphabet` using the
/// shared generator. See [`RandomService::string`].
#[must_use]
pub fn string(length: usize, alphabet: Option<&str>) -> String {
    shared().string(length, alphabet)
}
