use crate::error::{PoolChemError, Result};
use log::debug;
use poolchem_schemas::{
    file_formats::RangeTableFile, parameter::ParameterId, range::TargetRange,
};
use std::{fs, path::Path};

/// Default target bands. Classification and dosing both read from a
/// `RangeTable`, so they always agree on what "in range" means.
pub const DEFAULT_RANGES: [TargetRange; 6] = [
    TargetRange::new(ParameterId::Ph, 7.2, 7.6),
    TargetRange::new(ParameterId::FreeChlorine, 1.0, 3.0),
    TargetRange::new(ParameterId::TotalAlkalinity, 80.0, 120.0),
    TargetRange::new(ParameterId::CyanuricAcid, 30.0, 50.0),
    TargetRange::new(ParameterId::CalciumHardness, 150.0, 300.0),
    TargetRange::new(ParameterId::Salt, 2700.0, 3400.0),
];

/// One validated band per parameter, indexed by `ParameterId`.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeTable {
    ranges: [TargetRange; 6],
}

impl Default for RangeTable {
    fn default() -> Self {
        Self { ranges: DEFAULT_RANGES }
    }
}

impl RangeTable {
    /// Builds a table from an arbitrary list of bands.
    ///
    /// # Errors
    ///
    /// Every parameter must appear exactly once and each band must satisfy
    /// `min < max` with finite bounds.
    pub fn new(ranges: Vec<TargetRange>) -> Result<Self> {
        let mut slots: [Option<TargetRange>; 6] = [None; 6];

        for range in ranges {
            if !range.is_well_formed() {
                return Err(PoolChemError::InvalidRange {
                    parameter: range.parameter_id,
                    min: range.min,
                    max: range.max,
                });
            }
            let slot = &mut slots[range.parameter_id.index()];
            if slot.is_some() {
                return Err(PoolChemError::ConfigError(format!(
                    "Duplicate target range for '{}'",
                    range.parameter_id
                )));
            }
            *slot = Some(range);
        }

        let mut table = DEFAULT_RANGES;
        for (parameter, slot) in ParameterId::ALL.into_iter().zip(slots) {
            table[parameter.index()] = slot.ok_or_else(|| {
                PoolChemError::ConfigError(format!("Missing target range for '{}'", parameter))
            })?;
        }
        Ok(Self { ranges: table })
    }

    /// Loads a range table from a YAML file with a `ranges:` list.
    pub fn load_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().display().to_string();
        let content =
            fs::read_to_string(&path).map_err(|e| PoolChemError::FileIO(path_str.clone(), e))?;
        let file: RangeTableFile = serde_yaml::from_str(&content)
            .map_err(|e| PoolChemError::YamlParsing(path_str.clone(), e))?;
        debug!(
            "Loaded {} target ranges from '{}' (schema {})",
            file.ranges.len(),
            path_str,
            file.schema_version
        );
        Self::new(file.ranges)
    }

    pub fn get(&self, parameter: ParameterId) -> &TargetRange {
        &self.ranges[parameter.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &TargetRange> {
        self.ranges.iter()
    }
}
