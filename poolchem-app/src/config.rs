use anyhow::{Context, Result};
use log::info;
use poolchem_core::{
    dosage::coefficients, engine::EngineBuilder, RangeTable, RecommendationEngine,
};
use poolchem_schemas::file_formats::VisitFile;
use std::{fs, path::Path};

/// Loads a visit description (pool profile plus readings) from YAML.
pub fn load_visit<P: AsRef<Path>>(path: P) -> Result<VisitFile> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read visit file: {:?}", path))?;
    let visit: VisitFile = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse YAML from {:?}", path))?;
    info!(
        "Loaded visit with {} reading(s) from {:?} (schema {})",
        visit.readings.len(),
        path,
        visit.schema_version
    );
    Ok(visit)
}

/// Builds the engine, applying any externalized tables over the defaults.
pub fn build_engine(
    ranges_path: Option<&Path>,
    coefficients_path: Option<&Path>,
) -> Result<RecommendationEngine> {
    let mut builder = EngineBuilder::new();
    if let Some(path) = ranges_path {
        let ranges = RangeTable::load_yaml(path)
            .with_context(|| format!("Failed to load target ranges from {:?}", path))?;
        builder = builder.with_ranges(ranges);
    }
    if let Some(path) = coefficients_path {
        let coefficients = coefficients::load_yaml(path)
            .with_context(|| format!("Failed to load dose coefficients from {:?}", path))?;
        builder = builder.with_coefficients(coefficients);
    }
    builder.build().context("Failed to configure recommendation engine")
}
