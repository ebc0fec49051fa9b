use crate::error::{PoolChemError, Result};
use log::debug;
use poolchem_schemas::{coefficients::DoseCoefficients, file_formats::CoefficientFile};
use std::{fs, path::Path};

/// Pounds-to-ounces multiplier applied to every computed dose.
pub const OUNCES_PER_POUND: f64 = 16.0;

pub const SODA_ASH_PH_UP: f64 = 0.00015;
pub const MURIATIC_ACID_PH_DOWN: f64 = 0.0004;
pub const CAL_HYPO_CHLORINE_UP: f64 = 0.0000125;
pub const BAKING_SODA_ALKALINITY_UP: f64 = 0.000015;
pub const MURIATIC_ACID_ALKALINITY_DOWN: f64 = 0.000016;
pub const STABILIZER_CYA_UP: f64 = 0.0000083;
pub const CALCIUM_CHLORIDE_HARDNESS_UP: f64 = 0.0000125;

pub fn default_coefficients() -> DoseCoefficients {
    DoseCoefficients {
        soda_ash_ph_up: SODA_ASH_PH_UP,
        muriatic_acid_ph_down: MURIATIC_ACID_PH_DOWN,
        cal_hypo_chlorine_up: CAL_HYPO_CHLORINE_UP,
        baking_soda_alkalinity_up: BAKING_SODA_ALKALINITY_UP,
        muriatic_acid_alkalinity_down: MURIATIC_ACID_ALKALINITY_DOWN,
        stabilizer_cya_up: STABILIZER_CYA_UP,
        calcium_chloride_hardness_up: CALCIUM_CHLORIDE_HARDNESS_UP,
    }
}

/// Every coefficient must be finite and strictly positive, otherwise doses
/// would vanish or flip sign.
pub fn validate(coefficients: &DoseCoefficients) -> Result<()> {
    for (name, value) in coefficients.named() {
        if !value.is_finite() || value <= 0.0 {
            return Err(PoolChemError::ConfigError(format!(
                "Coefficient '{}' must be a positive number, got {}",
                name, value
            )));
        }
    }
    Ok(())
}

pub fn load_yaml<P: AsRef<Path>>(path: P) -> Result<DoseCoefficients> {
    let path_str = path.as_ref().display().to_string();
    let content =
        fs::read_to_string(&path).map_err(|e| PoolChemError::FileIO(path_str.clone(), e))?;
    let file: CoefficientFile = serde_yaml::from_str(&content)
        .map_err(|e| PoolChemError::YamlParsing(path_str.clone(), e))?;
    debug!("Loaded dose coefficients from '{}' (schema {})", path_str, file.schema_version);
    validate(&file.coefficients)?;
    Ok(file.coefficients)
}
