use poolchem_schemas::parameter::ParameterId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PoolChemError {
    #[error("Invalid pool profile: {0}")]
    InvalidPoolProfile(String),

    #[error("Unknown parameter '{0}'")]
    UnknownParameter(String),

    #[error("Parameter '{0}' is classified only and has no dosage formula")]
    NoDosageFormula(ParameterId),

    #[error("Reading for '{parameter}' is not a finite number ({value})")]
    InvalidReading { parameter: ParameterId, value: f64 },

    #[error("Target range for '{parameter}' is invalid ({min}-{max})")]
    InvalidRange { parameter: ParameterId, min: f64, max: f64 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),

    #[error("Failed to encode JSON: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("Failed to process CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),
}

pub type Result<T> = std::result::Result<T, PoolChemError>;
