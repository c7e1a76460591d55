// ============================================================================
// Input Module
// Turns the JSON record set into a strongly-typed PolynomialSpec
// ============================================================================
//
// Expected shape:
//
//   {
//     "keys": { "n": 3, "k": 2 },
//     "1": { "base": "10", "value": "4" },
//     "2": { "base": 2,    "value": "-11" }
//   }
//
// Every top-level property other than "keys" is a root, kept in document
// order. Bases arrive as JSON strings or numbers and leave as `Radix`.
// Digit strings are carried verbatim; they are only validated when the
// engine converts them.

mod errors;
mod loader;

pub use errors::{InputError, InputResult};
pub use loader::{load_spec, parse_spec, parse_value, RESERVED_KEY};
