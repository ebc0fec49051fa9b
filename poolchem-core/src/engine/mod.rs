pub mod aggregator;
pub mod builder;

pub use aggregator::{balanced_sentinel, RecommendationEngine};
pub use builder::EngineBuilder;

use crate::error::Result;
use poolchem_schemas::{
    pool::PoolProfile, reading::TestReading, recommendation::ChemicalRecommendation,
};

/// Runs the aggregation with the default ranges and coefficients.
pub fn recommend(
    profile: &PoolProfile,
    readings: &[TestReading],
) -> Result<Vec<ChemicalRecommendation>> {
    RecommendationEngine::default().recommend(profile, readings)
}
