// ============================================================================
// Numeric Module
// Exact arbitrary-base integer conversion
// ============================================================================
//
// This module provides:
// - Radix: a base validated to lie in 2..=16
// - convert: signed digit string -> BigInt, exact and unbounded
// - NumericError: Error types for malformed digits and bases
//
// Design principles:
// - No floating-point operations
// - All parsing returns Result (no panics)
// - Magnitudes are unbounded (num-bigint); nothing can silently overflow

mod errors;
mod radix;

pub use errors::{NumericError, NumericResult};
pub use radix::{convert, convert_str, digit_value, parse_radix, Radix, DIGIT_ALPHABET};
