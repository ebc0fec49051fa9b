pub mod classifier;
pub mod dosage;
pub mod engine;
pub mod error;
pub mod logger;
pub mod ranges;

pub use classifier::{classify, classify_str, Direction, RangeStatus};
pub use engine::{recommend, EngineBuilder, RecommendationEngine};
pub use error::{PoolChemError, Result};
pub use ranges::RangeTable;
