//! Result rendering.

use std::io::Write;
use std::time::Duration;

use serde::Serialize;

use crate::error::CliError;

/// A generated value, tagged with the command that produced it.
#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Output {
    Int { value: i64 },
    Between { value: i64 },
    Float { value: f64 },
    Jitter { nanos: u64 },
    String { value: String },
}

impl Output {
    #[must_use]
    pub fn jitter(duration: Duration) -> Self {
        Self::Jitter {
            nanos: u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX),
        }
    }

    fn plain(&self) -> String {
        match self {
            Self::Int { value } | Self::Between { value } => value.to_string(),
            Self::Float { value } => value.to_string(),
            Self::Jitter { nanos } => format!("{:?}", Duration::from_nanos(*nanos)),
            Self::String { value } => value.clone(),
        }
    }

    /// Writes the value followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Output` if `out` cannot be written.
    pub fn write_to(&self, out: &mut impl Write, json: bool) -> Result<(), CliError> {
        if json {
            serde_json::to_writer(&mut *out, self).map_err(std::io::Error::from)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", self.plain())?;
        }
        Ok(())
    }
}
