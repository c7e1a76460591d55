// ============================================================================
// Constant Term Report
// Result of a completed run: every converted root plus the derived values
// ============================================================================

use crate::numeric::Radix;
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use serde::{Serialize, Serializer};

/// Integers leave the crate as decimal text so no consumer loses precision.
fn as_decimal<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// A root after its digits were decoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertedRoot {
    pub label: String,
    pub base: Radix,
    /// Digit string as it appeared in the input
    #[serde(rename = "value")]
    pub digits: String,
    #[serde(rename = "decimal", serialize_with = "as_decimal")]
    pub value: BigInt,
}

/// Everything a run produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstantTermReport {
    /// Converted roots in input order
    pub roots: Vec<ConvertedRoot>,

    /// Product of all root values
    #[serde(serialize_with = "as_decimal")]
    pub product: BigInt,

    /// Polynomial degree `n`
    pub degree: u64,

    /// `(-1)^n`
    pub sign: i8,

    /// `(-1)^n * product`
    #[serde(serialize_with = "as_decimal")]
    pub constant_term: BigInt,

    pub computed_at: DateTime<Utc>,
}

impl ConstantTermReport {
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }
}
