use super::aggregator::RecommendationEngine;
use crate::{
    dosage::coefficients::{self, default_coefficients},
    error::Result,
    ranges::RangeTable,
};
use poolchem_schemas::coefficients::DoseCoefficients;

/// A fluent builder for a `RecommendationEngine`.
///
/// Anything not supplied falls back to the compiled-in defaults.
#[derive(Default)]
pub struct EngineBuilder {
    ranges: Option<RangeTable>,
    coefficients: Option<DoseCoefficients>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the target bands used by both classification and dosing.
    pub fn with_ranges(mut self, ranges: RangeTable) -> Self {
        self.ranges = Some(ranges);
        self
    }

    pub fn with_coefficients(mut self, coefficients: DoseCoefficients) -> Self {
        self.coefficients = Some(coefficients);
        self
    }

    /// Consumes the builder and returns a configured engine.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if any supplied coefficient is not a positive
    /// finite number. Range tables are validated when they are constructed.
    pub fn build(self) -> Result<RecommendationEngine> {
        let coefficients = self.coefficients.unwrap_or_else(default_coefficients);
        coefficients::validate(&coefficients)?;

        Ok(RecommendationEngine {
            ranges: self.ranges.unwrap_or_default(),
            coefficients,
        })
    }
}
