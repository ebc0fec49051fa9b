//! Live in/out-of-band feedback for single readings during a field visit.

use crate::{
    error::{PoolChemError, Result},
    ranges::RangeTable,
};
use poolchem_schemas::{parameter::ParameterId, reading::TestReading};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Low,
    High,
}

/// Result of classifying one reading against its target band.
///
/// `Unknown` means nothing has been entered yet and must never be rendered
/// the same way as `Out`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeStatus {
    In,
    Out(Direction),
    Unknown,
}

impl RangeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RangeStatus::In => "in",
            RangeStatus::Out(_) => "out",
            RangeStatus::Unknown => "unknown",
        }
    }

    pub fn is_out(self) -> bool {
        matches!(self, RangeStatus::Out(_))
    }
}

impl fmt::Display for RangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Classifies `value` against the band for `parameter` in `table`.
/// A missing or non-numeric value is `Unknown`.
pub fn classify_with(table: &RangeTable, parameter: ParameterId, value: Option<f64>) -> RangeStatus {
    let Some(value) = value.filter(|v| !v.is_nan()) else {
        return RangeStatus::Unknown;
    };
    let range = table.get(parameter);
    if value < range.min {
        RangeStatus::Out(Direction::Low)
    } else if value > range.max {
        RangeStatus::Out(Direction::High)
    } else {
        RangeStatus::In
    }
}

/// Classifies against the default target bands.
pub fn classify(parameter: ParameterId, value: Option<f64>) -> RangeStatus {
    classify_with(&RangeTable::default(), parameter, value)
}

/// Entry point for raw UI input where the parameter id arrives as a string.
///
/// # Errors
///
/// Returns `UnknownParameter` when `id` does not name a known parameter, so a
/// typo never gets silently classified against the wrong band.
pub fn classify_str(id: &str, value: Option<f64>) -> Result<RangeStatus> {
    let parameter =
        ParameterId::parse(id).ok_or_else(|| PoolChemError::UnknownParameter(id.to_string()))?;
    Ok(classify(parameter, value))
}

/// Classifies every reading of a visit, in the order supplied.
pub fn classify_all(table: &RangeTable, readings: &[TestReading]) -> Vec<(ParameterId, RangeStatus)> {
    readings
        .iter()
        .map(|r| (r.parameter_id, classify_with(table, r.parameter_id, r.value)))
        .collect()
}
