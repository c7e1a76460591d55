// ============================================================================
// Crate Errors
// Terminal failures of a run, one variant per failure class
// ============================================================================

use crate::input::InputError;
use crate::numeric::NumericError;
use std::path::PathBuf;
use thiserror::Error;

/// Every way a run can fail. None of them are retried and none of them
/// produce a partial report.
#[derive(Debug, Error)]
pub enum Error {
    /// No input path was supplied
    #[error("{0}")]
    Usage(String),

    /// Input file missing, unreadable, or not the expected JSON shape
    #[error("Error reading or parsing the file '{}': {source}", path.display())]
    InputAcquisition {
        path: PathBuf,
        #[source]
        source: InputError,
    },

    /// A root's digit string could not be decoded in its base
    #[error("root \"{label}\": {source}")]
    InvalidDigit {
        label: String,
        #[source]
        source: NumericError,
    },
}

impl Error {
    pub fn input(path: impl Into<PathBuf>, source: InputError) -> Self {
        Error::InputAcquisition {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this failure (success is 0)
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Usage(_) => 2,
            Error::InputAcquisition { .. } | Error::InvalidDigit { .. } => 1,
        }
    }
}

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, Error>;
