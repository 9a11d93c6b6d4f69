//! Error types.

use thiserror::Error;

/// Errors raised while obtaining randomness from the environment.
///
/// None of these reach callers of the drawing operations: seeding recovers
/// from them locally.
#[derive(Debug, Error)]
pub enum RandomError {
    /// The secure entropy source could not provide bytes.
    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(String),
}
