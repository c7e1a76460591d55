// ============================================================================
// Polynomial Specification
// Degree plus the ordered collection of encoded roots
// ============================================================================

use super::root::RootEntry;

/// Everything needed to compute a monic polynomial's constant term.
///
/// Built once by input acquisition and consumed once by the engine. Root
/// order follows the input document; it does not affect the result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PolynomialSpec {
    /// Polynomial degree `n`; its parity decides the sign of the constant term
    pub degree: u64,

    /// Encoded roots in input order
    pub roots: Vec<RootEntry>,

    /// Minimum number of roots the record set declares (`keys.k`), if any
    pub min_roots: Option<u64>,
}

impl PolynomialSpec {
    /// Create a specification with required parameters
    pub fn new(degree: u64, roots: Vec<RootEntry>) -> Self {
        Self {
            degree,
            roots,
            min_roots: None,
        }
    }

    /// Builder method: Record the declared minimum root count
    pub fn with_min_roots(mut self, k: u64) -> Self {
        self.min_roots = Some(k);
        self
    }

    /// Number of roots supplied
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Whether the number of roots matches the declared degree.
    ///
    /// A mismatch is not an error; the constant term is still the signed
    /// product of whatever roots were supplied.
    pub fn is_complete(&self) -> bool {
        self.roots.len() as u64 == self.degree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Radix;

    #[test]
    fn test_spec_creation() {
        let spec = PolynomialSpec::new(
            2,
            vec![
                RootEntry::new("r1", Radix::DECIMAL, "5"),
                RootEntry::new("r2", Radix::HEX, "a"),
            ],
        );

        assert_eq!(spec.degree, 2);
        assert_eq!(spec.root_count(), 2);
        assert!(spec.is_complete());
        assert_eq!(spec.min_roots, None);
    }

    #[test]
    fn test_incomplete_spec() {
        let spec = PolynomialSpec::new(3, vec![RootEntry::new("r1", Radix::DECIMAL, "5")])
            .with_min_roots(1);

        assert!(!spec.is_complete());
        assert_eq!(spec.min_roots, Some(1));
    }
}
