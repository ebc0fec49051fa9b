use serde::{Deserialize, Serialize};
use std::fmt;

/// The water-test parameters a technician can record during a visit.
///
/// Variant order is the fixed evaluation order used when building
/// recommendations, with `Salt` last since it is classified but never dosed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterId {
    Ph,
    FreeChlorine,
    TotalAlkalinity,
    CyanuricAcid,
    CalciumHardness,
    Salt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Unitless,
    Ppm,
}

impl ParameterId {
    pub const ALL: [ParameterId; 6] = [
        ParameterId::Ph,
        ParameterId::FreeChlorine,
        ParameterId::TotalAlkalinity,
        ParameterId::CyanuricAcid,
        ParameterId::CalciumHardness,
        ParameterId::Salt,
    ];

    /// Parameters that carry a dosage formula, in evaluation order.
    pub const DOSING_ORDER: [ParameterId; 5] = [
        ParameterId::Ph,
        ParameterId::FreeChlorine,
        ParameterId::TotalAlkalinity,
        ParameterId::CyanuricAcid,
        ParameterId::CalciumHardness,
    ];

    /// The identifier used on the wire and in the field-entry UI.
    pub fn as_str(self) -> &'static str {
        match self {
            ParameterId::Ph => "ph",
            ParameterId::FreeChlorine => "freeChlorine",
            ParameterId::TotalAlkalinity => "totalAlkalinity",
            ParameterId::CyanuricAcid => "cyanuricAcid",
            ParameterId::CalciumHardness => "calciumHardness",
            ParameterId::Salt => "salt",
        }
    }

    /// Human-readable label used in reason text.
    pub fn label(self) -> &'static str {
        match self {
            ParameterId::Ph => "pH",
            ParameterId::FreeChlorine => "Free chlorine",
            ParameterId::TotalAlkalinity => "Total alkalinity",
            ParameterId::CyanuricAcid => "Cyanuric acid",
            ParameterId::CalciumHardness => "Calcium hardness",
            ParameterId::Salt => "Salt",
        }
    }

    pub fn unit(self) -> Unit {
        match self {
            ParameterId::Ph => Unit::Unitless,
            _ => Unit::Ppm,
        }
    }

    /// Decimal places used when printing readings and bands for this parameter.
    pub fn display_precision(self) -> usize {
        match self {
            ParameterId::Ph | ParameterId::FreeChlorine => 1,
            _ => 0,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Parses a wire identifier, returning `None` for anything unrecognised.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == id)
    }
}

impl fmt::Display for ParameterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Unit {
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Unitless => "",
            Unit::Ppm => " ppm",
        }
    }
}

/// Formats a reading for display, padding whole numbers to the parameter's
/// precision (`6` -> `6.0` for chlorine) without rounding away entered digits.
pub fn format_reading(parameter: ParameterId, value: f64) -> String {
    let precision = parameter.display_precision();
    let plain = value.to_string();
    if precision > 0 && !plain.contains('.') && value.is_finite() {
        format!("{:.*}", precision, value)
    } else {
        plain
    }
}
