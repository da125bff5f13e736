use super::traits::{ConfigSection, FieldHelp};
use crate::error::GeneDriftError;
use serde::{Deserialize, Serialize};

const MAX_GRID_SIZE: usize = 64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    /// Members per grid side; the population holds `grid_size * grid_size` members
    pub grid_size: usize,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self { grid_size: 6 }
    }
}

impl PopulationConfig {
    pub fn population_size(&self) -> usize {
        self.grid_size * self.grid_size
    }
}

impl ConfigSection for PopulationConfig {
    fn section_name() -> &'static str {
        "population"
    }

    fn validate(&self) -> Result<(), GeneDriftError> {
        if self.grid_size == 0 {
            return Err(GeneDriftError::Configuration(
                "Grid size must be at least 1".to_string(),
            ));
        }
        // The tick is quadratic in population size
        if self.grid_size > MAX_GRID_SIZE {
            return Err(GeneDriftError::Configuration(format!(
                "Grid size must be at most {}",
                MAX_GRID_SIZE
            )));
        }
        Ok(())
    }

    fn field_help() -> &'static [FieldHelp] {
        &[FieldHelp {
            name: "grid_size",
            range: Some((1.0, MAX_GRID_SIZE as f64)),
            help: "Members per side of the square grid",
        }]
    }
}
