//! CLI error types.

use thiserror::Error;

/// Errors raised while parsing arguments or writing results.
#[derive(Debug, Error)]
pub enum CliError {
    /// The command line did not name a known command or had the wrong arity.
    #[error("usage error: {0}")]
    Usage(String),

    /// An argument was present but could not be used.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing to stdout failed.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    /// Process exit status for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) | Self::InvalidArgument(_) => 2,
            Self::Output(_) => 1,
        }
    }
}
