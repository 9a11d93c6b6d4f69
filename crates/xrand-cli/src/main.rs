//! xrand command-line entry point.

use std::error::Error;
use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod output;

use config::{Command, Config, USAGE};
use error::CliError;
use output::Output;

fn main() -> ExitCode {
    init_tracing();

    match run(std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("xrand: {e}");
            if matches!(e, CliError::Usage(_)) {
                eprintln!("{USAGE}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}

/// Logs go to stderr so stdout carries only the generated value.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    let result: Result<(), Box<dyn Error + Send + Sync>> =
        if std::env::var("XRAND_LOG_FORMAT").is_ok_and(|f| f == "json") {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    if let Err(e) = result {
        eprintln!("xrand: failed to initialise logging: {e}");
    }
}

fn run(args: impl IntoIterator<Item = String>) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    tracing::debug!(command = ?config.command, "generating value");

    let output = generate(&config.command);
    output.write_to(&mut io::stdout().lock(), config.json)
}

fn generate(command: &Command) -> Output {
    match command {
        Command::Int { n } => Output::Int {
            value: xrand::int_n(*n),
        },
        Command::Between { min, max } => Output::Between {
            value: xrand::int_between(*min, *max),
        },
        Command::Float => Output::Float {
            value: xrand::float64(),
        },
        Command::Jitter { duration, factor } => Output::jitter(xrand::jitter(*duration, *factor)),
        Command::String { length, alphabet } => Output::String {
            value: xrand::string(*length, alphabet.as_deref()),
        },
    }
}
