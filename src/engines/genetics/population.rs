use super::genome::{Genome, GENOME_LENGTH};
use super::phenotype::{decode, Phenotype};
use crate::types::GridPosition;
use rand::Rng;
use serde::Serialize;

/// One object on the grid: its genome, the phenotype derived from it, and where it sits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member {
    genome: Genome,
    phenotype: Phenotype,
    position: GridPosition,
}

impl Member {
    pub fn new(genome: Genome, position: GridPosition) -> Self {
        let phenotype = decode(&genome);
        Self {
            genome,
            phenotype,
            position,
        }
    }

    pub fn random<R: Rng>(position: GridPosition, rng: &mut R) -> Self {
        Self::new(Genome::random(GENOME_LENGTH, rng), position)
    }

    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    pub fn phenotype(&self) -> &Phenotype {
        &self.phenotype
    }

    pub fn position(&self) -> GridPosition {
        self.position
    }

    /// Swap in a new genome and re-derive the phenotype from it
    pub fn replace_genome(&mut self, genome: Genome) {
        self.phenotype = decode(&genome);
        self.genome = genome;
    }
}

/// Fixed-size, ordered set of members
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Population {
    members: Vec<Member>,
}

impl Population {
    /// Random `grid_size` x `grid_size` population, row-major
    ///
    /// # Panics
    /// Panics if `grid_size` is zero.
    pub fn grid<R: Rng>(grid_size: usize, rng: &mut R) -> Self {
        assert!(grid_size > 0, "Population grid must be at least 1x1");

        let members = (0..grid_size)
            .flat_map(|row| (0..grid_size).map(move |column| GridPosition::new(column, row)))
            .map(|position| Member::random(position, rng))
            .collect::<Vec<_>>();

        log::info!(
            "Created {}x{} population ({} members)",
            grid_size,
            grid_size,
            members.len()
        );

        Self { members }
    }

    /// Population from explicit members
    ///
    /// # Panics
    /// Panics if `members` is empty or the genomes differ in length.
    pub fn from_members(members: Vec<Member>) -> Self {
        assert!(!members.is_empty(), "Population must not be empty");
        let length = members[0].genome.len();
        assert!(
            members.iter().all(|m| m.genome.len() == length),
            "All members must share one genome length"
        );
        Self { members }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub(crate) fn members_mut(&mut self) -> &mut [Member] {
        &mut self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }
}
