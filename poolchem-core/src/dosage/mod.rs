//! Per-parameter dosage formulas.
//!
//! Every formula doses linearly in the distance from the nearest boundary of
//! the target band and linearly in pool volume, then converts the
//! pound-basis result to ounces.

pub mod alkalinity;
pub mod calcium_hardness;
pub mod chlorine;
pub mod coefficients;
pub mod cyanuric_acid;
pub mod ph;

use crate::{
    error::{PoolChemError, Result},
    ranges::RangeTable,
};
use self::coefficients::OUNCES_PER_POUND;
use poolchem_schemas::{
    coefficients::DoseCoefficients,
    parameter::{format_reading, ParameterId},
    range::TargetRange,
    recommendation::{Amount, ChemicalRecommendation, DoseUnit, Priority},
};

/// Inputs shared by every formula for one evaluation.
#[derive(Debug, Clone, Copy)]
pub struct DoseContext<'a> {
    pub range: &'a TargetRange,
    pub coefficients: &'a DoseCoefficients,
    pub volume_gallons: f64,
}

/// Maps a reading to a recommendation, or `None` when it is already in band.
pub type DosageFormula = fn(reading: f64, ctx: &DoseContext<'_>) -> Option<ChemicalRecommendation>;

/// Where a reading sits relative to its band, with the distance to the
/// nearest boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Deviation {
    Low(f64),
    High(f64),
}

impl Deviation {
    pub fn of(range: &TargetRange, reading: f64) -> Option<Self> {
        if reading < range.min {
            Some(Deviation::Low(range.min - reading))
        } else if reading > range.max {
            Some(Deviation::High(reading - range.max))
        } else {
            None
        }
    }
}

pub fn formula_for(parameter: ParameterId) -> Result<DosageFormula> {
    match parameter {
        ParameterId::Ph => Ok(ph::recommend),
        ParameterId::FreeChlorine => Ok(chlorine::recommend),
        ParameterId::TotalAlkalinity => Ok(alkalinity::recommend),
        ParameterId::CyanuricAcid => Ok(cyanuric_acid::recommend),
        ParameterId::CalciumHardness => Ok(calcium_hardness::recommend),
        ParameterId::Salt => Err(PoolChemError::NoDosageFormula(parameter)),
    }
}

/// Runs a single formula outside of a full aggregation.
///
/// # Errors
///
/// `InvalidPoolProfile` for a volume that is not a positive finite number,
/// `NoDosageFormula` for classifier-only parameters, `InvalidReading` for a
/// NaN or infinite reading.
pub fn dose(
    parameter: ParameterId,
    reading: f64,
    volume_gallons: f64,
    ranges: &RangeTable,
    coefficients: &DoseCoefficients,
) -> Result<Option<ChemicalRecommendation>> {
    if !volume_gallons.is_finite() || volume_gallons <= 0.0 {
        return Err(PoolChemError::InvalidPoolProfile(format!(
            "pool volume must be a positive number of gallons, got {}",
            volume_gallons
        )));
    }
    let formula = formula_for(parameter)?;
    if !reading.is_finite() {
        return Err(PoolChemError::InvalidReading { parameter, value: reading });
    }
    let ctx = DoseContext {
        range: ranges.get(parameter),
        coefficients,
        volume_gallons,
    };
    Ok(formula(reading, &ctx))
}

/// `coefficient × distance × volume`, converted from pounds to ounces.
pub(crate) fn ounces(coefficient: f64, distance: f64, volume_gallons: f64) -> f64 {
    coefficient * distance * volume_gallons * OUNCES_PER_POUND
}

pub(crate) fn reason(range: &TargetRange, reading: f64, deviation: &Deviation) -> String {
    let parameter = range.parameter_id;
    let direction = match deviation {
        Deviation::Low(_) => "low",
        Deviation::High(_) => "high",
    };
    format!(
        "{} is too {} ({}). Target: {}{}",
        parameter.label(),
        direction,
        format_reading(parameter, reading),
        range.band_label(),
        parameter.unit().suffix()
    )
}

pub(crate) fn product(
    chemical_name: &str,
    value: f64,
    unit: DoseUnit,
    reason_text: String,
    priority: Priority,
) -> ChemicalRecommendation {
    ChemicalRecommendation {
        chemical_name: chemical_name.to_string(),
        amount: Amount::Quantity { value, unit },
        reason_text,
        priority,
    }
}

/// Advice for parameters no chemical can lower: dilute with fresh water.
/// The amount names the share of water to replace, never a product dose.
pub(crate) fn drain_and_refill(
    ctx: &DoseContext<'_>,
    reading: f64,
    reason_text: String,
    priority: Priority,
) -> ChemicalRecommendation {
    let fraction = if reading > 0.0 {
        (1.0 - ctx.range.max / reading).clamp(0.0, 1.0)
    } else {
        0.0
    };
    ChemicalRecommendation {
        chemical_name: "Partial drain and refill".to_string(),
        amount: Amount::Instruction(format!(
            "Replace about {:.0}% of the water (~{:.0} gallons) with fresh water",
            fraction * 100.0,
            fraction * ctx.volume_gallons
        )),
        reason_text,
        priority,
    }
}
