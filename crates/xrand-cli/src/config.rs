//! Command-line parsing.

use std::time::Duration;

use crate::error::CliError;

pub const USAGE: &str = "\
usage: xrand [--json] <command> [args]

commands:
  int <n>                        random integer in [0, n)
  between <min> <max>            random integer in [min, max)
  float                          random float in [0.0, 1.0)
  jitter <duration> [factor]     duration altered by up to +/-factor (default 0.2)
  string <length> [alphabet]     random string; alphabet may be `alphanum`,
                                 `digits` or literal symbols (default alphanum)

durations are an integer followed by ns, us, ms, s, m or h (e.g. 250ms)";

/// The operation requested on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Int { n: i64 },
    Between { min: i64, max: i64 },
    Float,
    Jitter { duration: Duration, factor: Option<f64> },
    String { length: usize, alphabet: Option<String> },
}

/// Parsed invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Emit one JSON object instead of a bare value.
    pub json: bool,
    pub command: Command,
}

impl Config {
    /// Parses arguments, excluding the program name.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Usage` for unknown commands or wrong arity and
    /// `CliError::InvalidArgument` for values that fail to parse or would
    /// violate an operation's precondition.
    pub fn from_args<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut json = false;
        let mut positional = Vec::new();
        for arg in args {
            if arg == "--json" {
                json = true;
            } else {
                positional.push(arg);
            }
        }

        let (name, rest) = positional
            .split_first()
            .ok_or_else(|| CliError::Usage("missing command".to_owned()))?;
        let command = match (name.as_str(), rest) {
            ("int", [n]) => {
                let n = parse_int("n", n)?;
                if n <= 0 {
                    return Err(CliError::InvalidArgument(format!(
                        "n must be positive, got {n}"
                    )));
                }
                Command::Int { n }
            }
            ("between", [min, max]) => {
                let min = parse_int("min", min)?;
                let max = parse_int("max", max)?;
                if max <= min {
                    return Err(CliError::InvalidArgument(format!(
                        "max must be greater than min, got [{min}, {max})"
                    )));
                }
                Command::Between { min, max }
            }
            ("float", []) => Command::Float,
            ("jitter", [duration, factor @ ..]) if factor.len() <= 1 => Command::Jitter {
                duration: parse_duration(duration)?,
                factor: factor.first().map(|f| parse_factor(f)).transpose()?,
            },
            ("string", [length, alphabet @ ..]) if alphabet.len() <= 1 => Command::String {
                length: length.parse().map_err(|e| {
                    CliError::InvalidArgument(format!("length must be a non-negative integer: {e}"))
                })?,
                alphabet: alphabet.first().map(|a| resolve_alphabet(a)),
            },
            ("int" | "between" | "float" | "jitter" | "string", _) => {
                return Err(CliError::Usage(format!(
                    "wrong number of arguments for `{name}`"
                )));
            }
            _ => return Err(CliError::Usage(format!("unknown command `{name}`"))),
        };

        Ok(Self { json, command })
    }
}

fn parse_int(name: &str, value: &str) -> Result<i64, CliError> {
    value
        .parse()
        .map_err(|e| CliError::InvalidArgument(format!("{name} must be an integer: {e}")))
}

fn parse_factor(value: &str) -> Result<f64, CliError> {
    value
        .parse()
        .map_err(|e| CliError::InvalidArgument(format!("factor must be a number: {e}")))
}

fn resolve_alphabet(value: &str) -> String {
    match value {
        "alphanum" => xrand::ALPHANUM_ALPHABET.to_owned(),
        "digits" => xrand::DIGITS_ALPHABET.to_owned(),
        other => other.to_owned(),
    }
}

/// Parses `<integer><unit>` where unit is one of `ns`, `us`, `ms`, `s`, `m`
/// or `h`.
pub fn parse_duration(value: &str) -> Result<Duration, CliError> {
    let split = value
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(|| CliError::InvalidArgument(format!("duration `{value}` has no unit")))?;
    let (amount, unit) = value.split_at(split);
    let amount: u64 = amount
        .parse()
        .map_err(|e| CliError::InvalidArgument(format!("duration `{value}`: {e}")))?;

    let overflow = || CliError::InvalidArgument(format!("duration `{value}` is too large"));
    let duration = match unit {
        "ns" => Duration::from_nanos(amount),
        "us" => Duration::from_micros(amount),
        "ms" => Duration::from_millis(amount),
        "s" => Duration::from_secs(amount),
        "m" => Duration::from_secs(amount.checked_mul(60).ok_or_else(overflow)?),
        "h" => Duration::from_secs(amount.checked_mul(3600).ok_or_else(overflow)?),
        _ => {
            return Err(CliError::InvalidArgument(format!(
                "duration `{value}` has unknown unit `{unit}`"
            )));
        }
    };
    Ok(duration)
}
