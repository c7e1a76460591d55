// ============================================================================
// Constant Term Calculator
// Converts every root, folds the product, applies the sign convention
// ============================================================================

use super::accumulator::{accumulate_product, apply_sign_convention, sign_multiplier};
use super::report::{ConstantTermReport, ConvertedRoot};
use crate::domain::PolynomialSpec;
use crate::error::{Error, Result};
use crate::interfaces::{ComputationEvent, EventHandler, NoOpEventHandler};
use chrono::Utc;
use std::sync::Arc;

/// Runs one polynomial specification through conversion and accumulation.
///
/// The run is all-or-nothing: the first root that fails to convert aborts
/// it, and no product or constant-term event is emitted afterwards.
pub struct ConstantTermCalculator {
    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl ConstantTermCalculator {
    /// Create a new calculator
    pub fn new(event_handler: Arc<dyn EventHandler>) -> Self {
        Self { event_handler }
    }

    /// Compute the constant term of `spec`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDigit`] naming the root, character and base
    /// of the first digit string that cannot be decoded.
    pub fn compute(&self, spec: &PolynomialSpec) -> Result<ConstantTermReport> {
        let span = tracing::info_span!(
            "constant_term",
            degree = spec.degree,
            roots = spec.root_count()
        );
        let _guard = span.enter();

        if !spec.is_complete() {
            tracing::warn!(
                "degree n = {} but {} roots supplied",
                spec.degree,
                spec.root_count()
            );
        }
        if let Some(k) = spec.min_roots {
            if (spec.root_count() as u64) < k {
                tracing::warn!("keys.k = {} but only {} roots supplied", k, spec.root_count());
            }
        }

        let mut roots = Vec::with_capacity(spec.root_count());
        for entry in &spec.roots {
            let value = entry.value().map_err(|source| {
                tracing::debug!(root = %entry.label, "conversion failed: {}", source);
                Error::InvalidDigit {
                    label: entry.label.clone(),
                    source,
                }
            })?;

            tracing::debug!("{} -> {}", entry, value);
            self.event_handler.on_event(ComputationEvent::RootConverted {
                label: entry.label.clone(),
                base: entry.base,
                digits: entry.digits.clone(),
                value: value.clone(),
                timestamp: Utc::now(),
            });

            roots.push(ConvertedRoot {
                label: entry.label.clone(),
                base: entry.base,
                digits: entry.digits.clone(),
                value,
            });
        }

        let product = accumulate_product(roots.iter().map(|root| &root.value));
        self.event_handler.on_event(ComputationEvent::ProductComputed {
            product: product.clone(),
            root_count: roots.len(),
            timestamp: Utc::now(),
        });

        let sign = sign_multiplier(spec.degree);
        let constant_term = apply_sign_convention(product.clone(), spec.degree);
        self.event_handler
            .on_event(ComputationEvent::ConstantTermComputed {
                degree: spec.degree,
                sign,
                constant_term: constant_term.clone(),
                timestamp: Utc::now(),
            });

        tracing::info!("constant term c = {}", constant_term);

        Ok(ConstantTermReport {
            roots,
            product,
            degree: spec.degree,
            sign,
            constant_term,
            computed_at: Utc::now(),
        })
    }
}

impl Default for ConstantTermCalculator {
    fn default() -> Self {
        Self::new(Arc::new(NoOpEventHandler))
    }
}
