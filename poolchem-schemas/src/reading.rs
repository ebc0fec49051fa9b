use crate::parameter::ParameterId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single entry from the test kit. `value` is `None` until the technician
/// has entered a number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestReading {
    pub parameter_id: ParameterId,
    #[serde(default)]
    pub value: Option<f64>,
}

impl TestReading {
    pub fn new(parameter_id: ParameterId, value: f64) -> Self {
        Self { parameter_id, value: Some(value) }
    }

    pub fn absent(parameter_id: ParameterId) -> Self {
        Self { parameter_id, value: None }
    }
}

/// Present readings keyed by parameter, as stored alongside a calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestResults(BTreeMap<ParameterId, f64>);

impl TestResults {
    /// Collects the present readings. When a parameter appears more than once
    /// the last present value wins.
    pub fn from_readings(readings: &[TestReading]) -> Self {
        let values = readings
            .iter()
            .filter_map(|r| r.value.map(|v| (r.parameter_id, v)))
            .collect();
        Self(values)
    }

    pub fn get(&self, parameter: ParameterId) -> Option<f64> {
        self.0.get(&parameter).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParameterId, f64)> + '_ {
        self.0.iter().map(|(id, value)| (*id, *value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
