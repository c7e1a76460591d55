// ============================================================================
// Root Entry
// One polynomial root as it appears in the input: label, base, digit string
// ============================================================================

use crate::numeric::{convert, NumericResult, Radix};
use num_bigint::BigInt;
use serde::Serialize;
use std::fmt;

/// A single root, still in its encoded form.
///
/// Digits are kept verbatim and only checked when [`RootEntry::value`] is
/// called, so a malformed digit string surfaces at conversion time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RootEntry {
    /// Identifier of the root in the input record set
    pub label: String,

    /// Base the digits are written in
    pub base: Radix,

    /// Digit string, optionally prefixed with `-`
    pub digits: String,
}

impl RootEntry {
    pub fn new(label: impl Into<String>, base: Radix, digits: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            base,
            digits: digits.into(),
        }
    }

    /// Decode the digit string into an exact integer.
    pub fn value(&self) -> NumericResult<BigInt> {
        convert(&self.digits, self.base)
    }
}

impl fmt::Display for RootEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Root \"{}\" (base {}): {}", self.label, self.base, self.digits)
    }
}
