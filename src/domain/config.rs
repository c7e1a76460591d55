// ============================================================================
// Run Configuration
// Where the input comes from, how the report is rendered, how loud to log
// ============================================================================

use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

// ============================================================================
// Output Format
// ============================================================================

/// How the final report is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console layout
    #[default]
    Text,

    /// Single JSON document; all integers as decimal strings
    Json,
}

// ============================================================================
// Verbosity
// ============================================================================

/// Diagnostic verbosity, mapped onto a tracing level filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// No diagnostics at all
    Quiet,
    /// Warnings and errors only
    #[default]
    Normal,
    /// Run summary
    Verbose,
    /// Every converted root
    Debug,
    /// Everything
    Trace,
}

impl Verbosity {
    /// Derive verbosity from `-q` and the number of `-v` flags
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Verbosity::Quiet;
        }
        match verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            2 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::OFF,
            Verbosity::Normal => LevelFilter::WARN,
            Verbosity::Verbose => LevelFilter::INFO,
            Verbosity::Debug => LevelFilter::DEBUG,
            Verbosity::Trace => LevelFilter::TRACE,
        }
    }
}

// ============================================================================
// Complete Run Configuration
// ============================================================================

/// Configuration for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Path to the JSON record set
    pub input: PathBuf,

    /// Report rendering
    pub format: OutputFormat,

    /// Diagnostic verbosity
    pub verbosity: Verbosity,
}

impl RunConfig {
    /// Create a new configuration with required parameters
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            format: OutputFormat::default(),
            verbosity: Verbosity::default(),
        }
    }

    /// Builder method: Set output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Builder method: Set verbosity
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.input.as_os_str().is_empty() {
            return Err("Input path cannot be empty".to_string());
        }

        Ok(())
    }
}
