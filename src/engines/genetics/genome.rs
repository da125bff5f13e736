//! Genome representation for the mixing loop
//!
//! A genome is a fixed-length sequence of real-valued genes, each in `[0, 1)`.
//! It is decoded into a [`Phenotype`](super::phenotype::Phenotype) by
//! `phenotype::decode`, which reads genes by position:
//!
//! | index | trait      |
//! |-------|------------|
//! | 0     | shape      |
//! | 1     | (unused)   |
//! | 2..=4 | red, green, blue |
//! | 5     | roughness  |
//! | 6     | clearcoat  |
//!
//! Index 1 is generated and inherited like any other gene but nothing reads it.
//!
//! # Example
//!
//! ```
//! use genedrift::engines::genetics::{Genome, GENOME_LENGTH};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let genome = Genome::random(GENOME_LENGTH, &mut rng);
//! assert_eq!(genome.len(), GENOME_LENGTH);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Index;

pub const GENOME_LENGTH: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genome {
    genes: Vec<f64>,
}

impl Genome {
    /// Fresh genome with every gene drawn independently from `U[0, 1)`
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Self {
        Self {
            genes: (0..length).map(|_| rng.gen::<f64>()).collect(),
        }
    }

    /// Wrap explicit gene values. Values are trusted to lie in `[0, 1)`.
    pub fn from_genes(genes: Vec<f64>) -> Self {
        debug_assert!(
            genes.iter().all(|g| (0.0..1.0).contains(g)),
            "genes must lie in [0, 1): {:?}",
            genes
        );
        Self { genes }
    }

    pub fn genes(&self) -> &[f64] {
        &self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

impl Index<usize> for Genome {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.genes[index]
    }
}
