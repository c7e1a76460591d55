// ============================================================================
// Record Set Loader
// JSON file -> PolynomialSpec
// ============================================================================

use super::errors::{InputError, InputResult};
use crate::domain::{PolynomialSpec, RootEntry};
use crate::numeric::{parse_radix, NumericError, Radix};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Top-level property holding the degree; never treated as a root
pub const RESERVED_KEY: &str = "keys";

/// Raw shape of one root entry before normalization
#[derive(Debug, Deserialize)]
struct RootRecord {
    base: Value,
    value: String,
}

/// Read and parse a record set from disk.
///
/// The file is read in one step and nothing is retained afterwards.
pub fn load_spec(path: impl AsRef<Path>) -> InputResult<PolynomialSpec> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("read {} bytes from {}", text.len(), path.display());
    parse_spec(&text)
}

/// Parse a record set from JSON text.
pub fn parse_spec(text: &str) -> InputResult<PolynomialSpec> {
    let value: Value = serde_json::from_str(text)?;
    parse_value(value)
}

/// Build a specification from an already-parsed JSON value.
pub fn parse_value(value: Value) -> InputResult<PolynomialSpec> {
    let Value::Object(mut record) = value else {
        return Err(InputError::NotAnObject);
    };

    // shift_remove keeps the remaining roots in document order
    let keys = record
        .shift_remove(RESERVED_KEY)
        .ok_or(InputError::MissingDegree)?;
    let degree = parse_degree(&keys)?;
    let min_roots = keys.get("k").and_then(|k| match non_negative(k) {
        Some(k) => Some(k),
        None => {
            tracing::warn!("ignoring malformed keys.k: {}", k);
            None
        }
    });

    let roots = record
        .into_iter()
        .map(|(label, entry)| parse_root(label, entry))
        .collect::<InputResult<Vec<_>>>()?;

    tracing::debug!(degree, roots = roots.len(), "parsed record set");

    let spec = PolynomialSpec::new(degree, roots);
    Ok(match min_roots {
        Some(k) => spec.with_min_roots(k),
        None => spec,
    })
}

fn parse_degree(keys: &Value) -> InputResult<u64> {
    let n = keys
        .as_object()
        .and_then(|keys| keys.get("n"))
        .ok_or(InputError::MissingDegree)?;
    non_negative(n).ok_or_else(|| InputError::InvalidDegree(n.to_string()))
}

/// Non-negative integer given as a JSON number or as decimal text
fn non_negative(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn parse_root(label: String, entry: Value) -> InputResult<RootEntry> {
    let record: RootRecord = match serde_json::from_value(entry) {
        Ok(record) => record,
        Err(err) => {
            return Err(InputError::MalformedRoot {
                label,
                reason: err.to_string(),
            })
        }
    };

    let base = match parse_base(&record.base) {
        Ok(base) => base,
        Err(source) => return Err(InputError::InvalidBase { label, source }),
    };

    Ok(RootEntry::new(label, base, record.value))
}

fn parse_base(base: &Value) -> Result<Radix, NumericError> {
    match base {
        Value::String(text) => parse_radix(text),
        Value::Number(n) => match n.as_u64() {
            Some(raw) => Radix::try_from(raw),
            None => Err(NumericError::MalformedBase),
        },
        _ => Err(NumericError::MalformedBase),
    }
}
