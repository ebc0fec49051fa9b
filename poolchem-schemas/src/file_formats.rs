use crate::{
    coefficients::DoseCoefficients, pool::PoolProfile, range::TargetRange, reading::TestReading,
};
use serde::Deserialize;

/// One service visit: the pool and what the test kit showed.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitFile {
    pub schema_version: String,
    pub pool: PoolProfile,
    #[serde(default)]
    pub technician_id: Option<String>,
    pub readings: Vec<TestReading>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeTableFile {
    pub schema_version: String,
    pub ranges: Vec<TargetRange>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoefficientFile {
    pub schema_version: String,
    pub coefficients: DoseCoefficients,
}
