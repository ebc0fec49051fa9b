pub mod coefficients;
pub mod file_formats;
pub mod parameter;
pub mod pool;
pub mod range;
pub mod reading;
pub mod recommendation;
pub mod record;
