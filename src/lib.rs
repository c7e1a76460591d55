// ============================================================================
// Constant Term Library
// Exact constant term of a monic polynomial from roots in bases 2-16
// ============================================================================

//! # Constant Term
//!
//! Computes `c = (-1)^n * (r1 * r2 * ... * rk)`, the constant term of a monic
//! polynomial of degree `n`, from roots written as digit strings in bases
//! 2 through 16.
//!
//! ## Features
//!
//! - **Exact arithmetic**: roots and products are `num_bigint::BigInt`, so
//!   nothing is rounded or truncated however long the digit strings get
//! - **Case-insensitive digits** with an optional leading `-`
//! - **Typed input**: the JSON record set is normalized into a
//!   [`PolynomialSpec`](domain::PolynomialSpec) before any arithmetic runs
//! - **Observable runs** through the [`EventHandler`](interfaces::EventHandler) trait
//!
//! ## Example
//!
//! ```rust
//! use constant_term::prelude::*;
//! use num_bigint::BigInt;
//!
//! let spec = parse_spec(
//!     r#"{"keys":{"n":3}, "r1":{"base":"2","value":"-11"},
//!         "r2":{"base":"10","value":"4"}, "r3":{"base":"10","value":"2"}}"#,
//! )
//! .unwrap();
//!
//! let report = ConstantTermCalculator::default().compute(&spec).unwrap();
//!
//! assert_eq!(report.product, BigInt::from(-24));
//! assert_eq!(report.constant_term, BigInt::from(24));
//! ```

pub mod domain;
pub mod engine;
pub mod error;
pub mod input;
pub mod interfaces;
pub mod numeric;
pub mod output;

pub use error::{Error, Result};

use crate::engine::{ConstantTermCalculator, ConstantTermReport};
use crate::interfaces::EventHandler;
use std::path::Path;
use std::sync::Arc;

/// Load the record set at `path` and compute its constant term.
///
/// # Errors
/// - [`Error::InputAcquisition`] if the file cannot be read or shaped
/// - [`Error::InvalidDigit`] if any root fails to convert
pub fn compute_from_path(
    path: impl AsRef<Path>,
    event_handler: Arc<dyn EventHandler>,
) -> Result<ConstantTermReport> {
    let path = path.as_ref();
    let spec = input::load_spec(path).map_err(|source| Error::input(path, source))?;
    ConstantTermCalculator::new(event_handler).compute(&spec)
}

// Re-exports for convenience
pub mod prelude {
    pub use crate::compute_from_path;
    pub use crate::domain::{OutputFormat, PolynomialSpec, RootEntry, RunConfig, Verbosity};
    pub use crate::engine::{
        accumulate_product, apply_sign_convention, sign_multiplier, ConstantTermCalculator,
        ConstantTermReport, ConvertedRoot,
    };
    pub use crate::error::{Error, Result};
    pub use crate::input::{load_spec, parse_spec, InputError};
    pub use crate::interfaces::{
        CollectingEventHandler, ComputationEvent, EventHandler, LoggingEventHandler,
        NoOpEventHandler,
    };
    pub use crate::numeric::{convert, convert_str, NumericError, Radix};
    pub use crate::output::{render_json, render_text, write_report};
}
