// ============================================================================
// Input Errors
// Failures while acquiring and shaping the JSON record set
// ============================================================================

use crate::numeric::NumericError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised before any root is converted
#[derive(Debug, Error)]
pub enum InputError {
    /// File could not be read
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Text is not valid JSON
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level JSON value is not an object
    #[error("expected a JSON object at the top level")]
    NotAnObject,

    /// No `keys.n` entry
    #[error("missing degree: expected \"keys\": {{ \"n\": <integer> }}")]
    MissingDegree,

    /// `keys.n` present but not a non-negative integer
    #[error("degree \"n\" must be a non-negative integer, got {0}")]
    InvalidDegree(String),

    /// Root entry lacks `base`/`value` or has the wrong JSON types
    #[error("root \"{label}\": {reason}")]
    MalformedRoot { label: String, reason: String },

    /// Root entry's base is not a supported integer
    #[error("root \"{label}\": {source}")]
    InvalidBase {
        label: String,
        #[source]
        source: NumericError,
    },
}

/// Result type alias for input acquisition
pub type InputResult<T> = Result<T, InputError>;
