use super::traits::{validate_probability, ConfigSection, FieldHelp};
use crate::error::GeneDriftError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixingConfig {
    /// Chance per ordered pair per tick that the first member absorbs from the second
    pub crossover_rate: f64,
    /// Chance per gene, during a crossover, of a fresh random value
    pub mutation_rate: f64,
    /// Fixed seed for reproducible runs; entropy when absent
    pub seed: Option<u64>,
}

impl Default for MixingConfig {
    fn default() -> Self {
        Self {
            crossover_rate: 0.005,
            mutation_rate: 0.001,
            seed: None,
        }
    }
}

impl ConfigSection for MixingConfig {
    fn section_name() -> &'static str {
        "mixing"
    }

    fn validate(&self) -> Result<(), GeneDriftError> {
        validate_probability("Crossover rate", self.crossover_rate)?;
        validate_probability("Mutation rate", self.mutation_rate)?;
        Ok(())
    }

    fn field_help() -> &'static [FieldHelp] {
        &[
            FieldHelp {
                name: "crossover_rate",
                range: Some((0.0, 1.0)),
                help: "Per-pair, per-tick chance of a crossover",
            },
            FieldHelp {
                name: "mutation_rate",
                range: Some((0.0, 1.0)),
                help: "Per-gene chance of mutation during a crossover",
            },
            FieldHelp {
                name: "seed",
                range: None,
                help: "Random seed; omit for a different run every time",
            },
        ]
    }
}
