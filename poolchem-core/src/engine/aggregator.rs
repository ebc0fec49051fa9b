use crate::{
    classifier::{classify_with, RangeStatus},
    dosage::{self, coefficients::default_coefficients, DoseContext},
    error::{PoolChemError, Result},
    ranges::RangeTable,
};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use poolchem_schemas::{
    coefficients::DoseCoefficients,
    parameter::ParameterId,
    pool::{PoolProfile, PoolType},
    reading::{TestReading, TestResults},
    recommendation::{Amount, ChemicalRecommendation, Priority},
    record::CalculationRecord,
};

pub const BALANCED_CHEMICAL_NAME: &str = "No chemicals needed";

/// Turns a visit's readings into an ordered list of recommendations.
///
/// Holds only immutable tables, so one engine can serve any number of
/// callers concurrently.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationEngine {
    pub(super) ranges: RangeTable,
    pub(super) coefficients: DoseCoefficients,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self {
            ranges: RangeTable::default(),
            coefficients: default_coefficients(),
        }
    }
}

/// The single record returned when every present reading is in band.
pub fn balanced_sentinel() -> ChemicalRecommendation {
    ChemicalRecommendation {
        chemical_name: BALANCED_CHEMICAL_NAME.to_string(),
        amount: Amount::Instruction("Pool chemistry is balanced".to_string()),
        reason_text: "All levels are within target ranges".to_string(),
        priority: Priority::Low,
    }
}

impl RecommendationEngine {
    pub fn ranges(&self) -> &RangeTable {
        &self.ranges
    }

    pub fn coefficients(&self) -> &DoseCoefficients {
        &self.coefficients
    }

    /// Live classification against this engine's bands.
    pub fn classify(&self, parameter: ParameterId, value: Option<f64>) -> RangeStatus {
        classify_with(&self.ranges, parameter, value)
    }

    /// Evaluates pH, chlorine, alkalinity, CYA and calcium hardness in that
    /// order, skipping absent readings. Salt is never dosed.
    ///
    /// # Errors
    ///
    /// `InvalidPoolProfile` when the volume is missing, zero, negative or
    /// non-finite; `InvalidReading` when a present reading is NaN or infinite.
    /// No partial list is returned on error.
    pub fn recommend(
        &self,
        profile: &PoolProfile,
        readings: &[TestReading],
    ) -> Result<Vec<ChemicalRecommendation>> {
        let volume_gallons = profile.usable_volume().ok_or_else(|| {
            PoolChemError::InvalidPoolProfile(match profile.volume_gallons {
                Some(v) => format!("pool volume must be a positive number of gallons, got {}", v),
                None => "pool volume is missing".to_string(),
            })
        })?;

        let results = TestResults::from_readings(readings);
        for parameter in ParameterId::DOSING_ORDER {
            if let Some(value) = results.get(parameter).filter(|v| !v.is_finite()) {
                return Err(PoolChemError::InvalidReading { parameter, value });
            }
        }

        let mut recommendations = Vec::new();
        for parameter in ParameterId::DOSING_ORDER {
            let Some(value) = results.get(parameter) else {
                debug!("No reading for '{}', skipping", parameter);
                continue;
            };
            if value < 0.0 {
                warn!("Negative reading for '{}' ({}), dosing anyway", parameter, value);
            }

            let formula = dosage::formula_for(parameter)?;
            let ctx = DoseContext {
                range: self.ranges.get(parameter),
                coefficients: &self.coefficients,
                volume_gallons,
            };
            match formula(value, &ctx) {
                Some(rec) => {
                    debug!("'{}' at {} -> {} ({})", parameter, value, rec.chemical_name, rec.amount);
                    recommendations.push(rec);
                }
                None => debug!("'{}' at {} is within target", parameter, value),
            }
        }

        if let Some(salt) = results.get(ParameterId::Salt) {
            if profile.pool_type != PoolType::Salt {
                warn!(
                    "Salt reading ({}) supplied for a {:?} pool; salt is not dosed",
                    salt, profile.pool_type
                );
            }
        }

        if recommendations.is_empty() {
            recommendations.push(balanced_sentinel());
        }

        info!(
            "Computed {} recommendation(s) for a {:.0} gallon pool",
            recommendations.len(),
            volume_gallons
        );
        Ok(recommendations)
    }

    /// Runs `recommend` and packages the result for history storage. The
    /// timestamp is supplied by the caller; the engine never reads the clock.
    pub fn calculate(
        &self,
        profile: &PoolProfile,
        readings: &[TestReading],
        technician_id: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> Result<CalculationRecord> {
        let recommendations = self.recommend(profile, readings)?;
        Ok(CalculationRecord::new(
            profile,
            readings,
            recommendations,
            technician_id,
            timestamp,
        ))
    }
}
