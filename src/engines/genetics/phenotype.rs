use super::genome::{Genome, GENOME_LENGTH};
use crate::types::Shape;
use serde::{Deserialize, Serialize};

const SHAPE_GENE: usize = 0;
const RED_GENE: usize = 2;
const GREEN_GENE: usize = 3;
const BLUE_GENE: usize = 4;
const ROUGHNESS_GENE: usize = 5;
const CLEARCOAT_GENE: usize = 6;

/// Upper bounds of the shape gene bands: `[0, 0.3)` cube, `[0.3, 0.6)` sphere, rest tetrahedron.
const CUBE_BELOW: f64 = 0.3;
const SPHERE_BELOW: f64 = 0.6;

/// Visual traits decoded from a genome
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Phenotype {
    pub shape: Shape,
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub roughness: f64,
    pub clearcoat: f64,
}

/// Decode a genome into its phenotype.
///
/// Pure and total over genomes of length [`GENOME_LENGTH`]. Gene values are
/// copied through as-is; nothing is clamped.
///
/// # Panics
/// Panics if the genome does not have exactly [`GENOME_LENGTH`] genes.
pub fn decode(genome: &Genome) -> Phenotype {
    assert_eq!(
        genome.len(),
        GENOME_LENGTH,
        "Genome must have exactly {} genes",
        GENOME_LENGTH
    );

    Phenotype {
        shape: decode_shape(genome[SHAPE_GENE]),
        red: genome[RED_GENE],
        green: genome[GREEN_GENE],
        blue: genome[BLUE_GENE],
        roughness: genome[ROUGHNESS_GENE],
        clearcoat: genome[CLEARCOAT_GENE],
    }
}

fn decode_shape(gene: f64) -> Shape {
    if gene < CUBE_BELOW {
        Shape::Cube
    } else if gene < SPHERE_BELOW {
        Shape::Sphere
    } else {
        Shape::Tetrahedron
    }
}
