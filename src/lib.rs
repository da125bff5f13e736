pub mod config;
pub mod engines;
pub mod error;
pub mod render;
pub mod types;

pub use engines::genetics::{decode, Genome, MixingEngine, Phenotype, Population};
pub use engines::{Driver, RunOptions};
pub use error::{GeneDriftError, Result};
pub use types::{GridPosition, Shape};
