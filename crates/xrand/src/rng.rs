//! Random source abstraction.
//!
//! In production this wraps a fast `rand` generator seeded once from the
//! operating system. Any other implementation can be injected into a
//! [`RandomService`](crate::service::RandomService).

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Mask selecting the low 63 bits of a `u64`.
pub const INT63_MASK: u64 = 0x7FFF_FFFF_FFFF_FFFF;

/// Abstraction over a pseudo-random generator.
pub trait RandomSource: Send {
    /// Generate a non-negative 63-bit integer (the top bit is always clear).
    fn next_int63(&mut self) -> u64;

    /// Generate a `u64` uniformly distributed in `[0, n)`. `n` is never zero.
    fn next_below(&mut self, n: u64) -> u64;

    /// Generate a random `f64` in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;
}

/// Production source backed by [`StdRng`].
#[derive(Debug)]
pub struct StdRandomSource {
    inner: StdRng,
}

impl StdRandomSource {
    /// Create a source whose whole output sequence is derived from `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandomSource {
    fn next_int63(&mut self) -> u64 {
        self.inner.next_u64() & INT63_MASK
    }

    fn next_below(&mut self, n: u64) -> u64 {
        self.inner.random_range(0..n)
    }

    fn next_f64(&mut self) -> f64 {
        self.inner.random()
    }
}
