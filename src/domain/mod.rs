// ============================================================================
// Domain Models Module
// Contains the polynomial input model and run configuration
// ============================================================================

pub mod config;
pub mod polynomial;
pub mod root;

pub use config::{OutputFormat, RunConfig, Verbosity};
pub use polynomial::PolynomialSpec;
pub use root::RootEntry;
