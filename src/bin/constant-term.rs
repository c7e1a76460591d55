// ============================================================================
// constant-term CLI
// Reads a JSON record set of encoded roots and prints the constant term
// ============================================================================

use clap::Parser;
use constant_term::domain::{OutputFormat, RunConfig, Verbosity};
use constant_term::interfaces::LoggingEventHandler;
use constant_term::output::write_report;
use constant_term::{compute_from_path, Error};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Please provide the path to the JSON file as an argument.\n\
Usage: constant-term <filename.json>";

/// Compute the constant term of a monic polynomial from roots encoded in bases 2-16
#[derive(Parser, Debug)]
#[command(name = "constant-term")]
#[command(version)]
struct Args {
    /// JSON file with "keys": { "n": <degree> } and one { base, value } entry per root
    input: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// More diagnostics on stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// No diagnostics at all
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn into_config(self) -> Result<RunConfig, Error> {
        let input = self.input.ok_or_else(|| Error::Usage(USAGE.to_string()))?;
        let config = RunConfig::new(input)
            .with_format(self.format)
            .with_verbosity(Verbosity::from_flags(self.quiet, self.verbose));
        config.validate().map_err(Error::Usage)?;
        Ok(config)
    }
}

/// RUST_LOG wins when set; otherwise the -v/-q flags pick the level.
fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.level_filter().to_string()));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

fn main() -> ExitCode {
    let config = match Args::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(e.exit_code());
        }
    };

    init_logging(config.verbosity);
    tracing::debug!(?config, "starting run");

    let report = match compute_from_path(&config.input, Arc::new(LoggingEventHandler)) {
        Ok(report) => report,
        Err(e) => {
            tracing::debug!(?e, "run failed");
            eprintln!("Error: {}", e);
            return ExitCode::from(e.exit_code());
        }
    };

    let stdout = std::io::stdout();
    if let Err(e) = write_report(&mut stdout.lock(), &report, config.format) {
        eprintln!("Error: failed to write report: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
