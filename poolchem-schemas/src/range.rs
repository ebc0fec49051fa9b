use crate::parameter::{format_reading, ParameterId};
use serde::{Deserialize, Serialize};

/// An inclusive target band for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetRange {
    pub parameter_id: ParameterId,
    pub min: f64,
    pub max: f64,
}

impl TargetRange {
    pub const fn new(parameter_id: ParameterId, min: f64, max: f64) -> Self {
        Self { parameter_id, min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn is_well_formed(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// The band as printed in reason text, e.g. `7.2-7.6` or `80-120`.
    /// Bounds are never rounded, so overridden bands print as configured.
    pub fn band_label(&self) -> String {
        format!(
            "{}-{}",
            format_reading(self.parameter_id, self.min),
            format_reading(self.parameter_id, self.max)
        )
    }
}
