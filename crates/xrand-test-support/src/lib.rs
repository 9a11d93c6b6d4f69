//! Shared test doubles for the xrand crates.

mod clock;
mod entropy;
mod rng;

pub use clock::FixedClock;
pub use entropy::{FailingEntropy, FixedEntropy};
pub use rng::{MockSource, SequenceSource};
