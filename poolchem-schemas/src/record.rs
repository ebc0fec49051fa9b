use crate::{
    pool::{PoolProfile, PoolType},
    reading::{TestReading, TestResults},
    recommendation::ChemicalRecommendation,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The payload handed to history storage after a calculation.
///
/// Only plain data lives here so the record can be written to any store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRecord {
    pub pool_volume: Option<f64>,
    pub pool_type: PoolType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technician_id: Option<String>,
    pub test_results: TestResults,
    pub chemical_recommendations: Vec<ChemicalRecommendation>,
    pub timestamp: DateTime<Utc>,
}

impl CalculationRecord {
    pub fn new(
        profile: &PoolProfile,
        readings: &[TestReading],
        recommendations: Vec<ChemicalRecommendation>,
        technician_id: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            pool_volume: profile.volume_gallons,
            pool_type: profile.pool_type,
            client_id: profile.client_id.clone(),
            technician_id,
            test_results: TestResults::from_readings(readings),
            chemical_recommendations: recommendations,
            timestamp,
        }
    }
}
