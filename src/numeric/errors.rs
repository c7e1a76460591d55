// ============================================================================
// Numeric Errors
// Error types for radix parsing and digit conversion
// ============================================================================

use std::fmt;

/// Errors that can occur while turning a digit string into an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Character is outside `0-9a-f` or not below the base
    InvalidDigit { digit: char, base: u32 },
    /// Base outside the supported 2..=16 range
    UnsupportedBase(u32),
    /// Nothing left to parse after the optional sign
    EmptyDigits,
    /// Base text could not be read as a decimal integer
    MalformedBase,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidDigit { digit, base } => {
                write!(f, "Invalid digit '{}' for base {}", digit, base)
            },
            NumericError::UnsupportedBase(base) => {
                write!(f, "unsupported base {}: expected a value from 2 to 16", base)
            },
            NumericError::EmptyDigits => write!(f, "empty digit string"),
            NumericError::MalformedBase => {
                write!(f, "malformed base: expected a decimal integer")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
