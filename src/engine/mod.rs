// ============================================================================
// Engine Module
// Contains the root conversion and accumulation logic
// ============================================================================

mod accumulator;
mod calculator;
mod report;

pub use accumulator::{accumulate_product, apply_sign_convention, sign_multiplier};
pub use calculator::ConstantTermCalculator;
pub use report::{ConstantTermReport, ConvertedRoot};
