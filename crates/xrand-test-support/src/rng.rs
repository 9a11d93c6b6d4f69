//! Test sources — deterministic `RandomSource` implementations for tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use xrand::rng::{INT63_MASK, RandomSource};

/// A no-op source that always returns zero. Suitable for tests that do not
/// depend on specific random values.
#[derive(Debug)]
pub struct MockSource;

impl RandomSource for MockSource {
    fn next_int63(&mut self) -> u64 {
        0
    }

    fn next_below(&mut self, _n: u64) -> u64 {
        0
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }
}

/// A source that replays predetermined values. Panics if a sequence is
/// exhausted. Used in tests that need exact control over the bits handed
/// to the service (e.g. which alphabet indices get rejected).
#[derive(Debug)]
pub struct SequenceSource {
    ints: Vec<u64>,
    int_index: usize,
    floats: Vec<f64>,
    float_index: usize,
    draws: Arc<AtomicUsize>,
}

impl SequenceSource {
    /// Create a new `SequenceSource` replaying `ints` for integer draws.
    ///
    /// `next_int63` masks each value to 63 bits; `next_below(n)` returns the
    /// value modulo `n`.
    #[must_use]
    pub fn new(ints: Vec<u64>) -> Self {
        Self {
            ints,
            int_index: 0,
            floats: Vec::new(),
            float_index: 0,
            draws: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Replay `floats` for float draws.
    #[must_use]
    pub fn with_floats(mut self, floats: Vec<f64>) -> Self {
        self.floats = floats;
        self
    }

    /// Handle observing the total number of draws, usable after the source
    /// has been moved into a service.
    #[must_use]
    pub fn draw_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.draws)
    }

    fn next_int(&mut self) -> u64 {
        let val = self.ints[self.int_index];
        self.int_index += 1;
        self.draws.fetch_add(1, Ordering::SeqCst);
        val
    }
}

impl RandomSource for SequenceSource {
    fn next_int63(&mut self) -> u64 {
        self.next_int() & INT63_MASK
    }

    fn next_below(&mut self, n: u64) -> u64 {
        self.next_int() % n
    }

    fn next_f64(&mut self) -> f64 {
        let val = self.floats[self.float_index];
        self.float_index += 1;
        self.draws.fetch_add(1, Ordering::SeqCst);
        val
    }
}
