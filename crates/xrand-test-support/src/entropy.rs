//! Test entropy — `EntropySource` implementations with known behaviour.

use xrand::error::RandomError;
use xrand::seed::EntropySource;

/// Entropy that always yields the same eight bytes.
#[derive(Debug, Clone, Copy)]
pub struct FixedEntropy(pub [u8; 8]);

impl EntropySource for FixedEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), RandomError> {
        for (dst, src) in buf.iter_mut().zip(self.0.iter().cycle()) {
            *dst = *src;
        }
        Ok(())
    }
}

/// Entropy that is never available. Counts how often it was asked.
#[derive(Debug, Default)]
pub struct FailingEntropy {
    /// Number of `fill` calls made so far.
    pub calls: usize,
}

impl EntropySource for FailingEntropy {
    fn fill(&mut self, _buf: &mut [u8]) -> Result<(), RandomError> {
        self.calls += 1;
        Err(RandomError::EntropyUnavailable(
            "simulated entropy failure".to_owned(),
        ))
    }
}
