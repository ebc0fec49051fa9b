use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoseUnit {
    /// Dry product by weight.
    Ounces,
    /// Liquid product by volume.
    FluidOunces,
}

/// What to add, or what to do when there is nothing to add.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Quantity { value: f64, unit: DoseUnit },
    Instruction(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChemicalRecommendation {
    pub chemical_name: String,
    pub amount: Amount,
    pub reason_text: String,
    pub priority: Priority,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl DoseUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            DoseUnit::Ounces => "oz",
            DoseUnit::FluidOunces => "fl oz",
        }
    }
}

impl Amount {
    pub fn quantity(&self) -> Option<f64> {
        match self {
            Amount::Quantity { value, .. } => Some(*value),
            Amount::Instruction(_) => None,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Quantity { value, unit } => write!(f, "{:.1} {}", value, unit.symbol()),
            Amount::Instruction(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_serializes_without_tags() {
        let dose = Amount::Quantity { value: 14.4, unit: DoseUnit::Ounces };
        assert_eq!(serde_json::to_string(&dose).unwrap(), r#"{"value":14.4,"unit":"ounces"}"#);

        let wait = Amount::Instruction("Wait 24 hours and retest".to_string());
        assert_eq!(serde_json::to_string(&wait).unwrap(), r#""Wait 24 hours and retest""#);

        let parsed: Amount = serde_json::from_str(r#"{"value":3.5,"unit":"fluid_ounces"}"#).unwrap();
        assert_eq!(parsed.quantity(), Some(3.5));
    }

    #[test]
    fn display_rounds_quantities_to_one_decimal() {
        let dose = Amount::Quantity { value: 14.4444, unit: DoseUnit::FluidOunces };
        assert_eq!(dose.to_string(), "14.4 fl oz");
    }
}
