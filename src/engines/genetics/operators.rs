use super::genome::Genome;
use rand::Rng;

/// Chance that a child gene comes from the recipient rather than the donor
pub const RECIPIENT_GENE_PROBABILITY: f64 = 0.5;

/// Result of one crossover
#[derive(Debug, Clone, PartialEq)]
pub struct Offspring {
    pub genome: Genome,
    /// Genes replaced by a fresh random value
    pub mutations: usize,
}

/// Bernoulli gate for a single pair: does the recipient absorb from the donor this tick?
pub fn should_cross<R: Rng>(crossover_rate: f64, rng: &mut R) -> bool {
    rng.gen::<f64>() < crossover_rate
}

/// Uniform crossover of `donor` into `recipient` with per-gene mutation.
///
/// For every index the child takes the recipient's gene with probability 0.5,
/// otherwise the donor's; then, with probability `mutation_rate`, that gene is
/// overwritten by a fresh `U[0, 1)` draw. Neither parent is modified.
///
/// # Panics
/// Panics if the parents have different genome lengths.
pub fn crossover<R: Rng>(
    recipient: &Genome,
    donor: &Genome,
    mutation_rate: f64,
    rng: &mut R,
) -> Offspring {
    assert_eq!(
        recipient.len(),
        donor.len(),
        "Parents must have the same genome length"
    );

    let mut mutations = 0;
    let genes = recipient
        .genes()
        .iter()
        .zip(donor.genes())
        .map(|(&own, &other)| {
            let inherited = if rng.gen::<f64>() < RECIPIENT_GENE_PROBABILITY {
                own
            } else {
                other
            };

            match mutate_gene(mutation_rate, rng) {
                Some(fresh) => {
                    mutations += 1;
                    fresh
                }
                None => inherited,
            }
        })
        .collect();

    Offspring {
        genome: Genome::from_genes(genes),
        mutations,
    }
}

/// Point mutation: with probability `mutation_rate`, a fresh gene value
pub fn mutate_gene<R: Rng>(mutation_rate: f64, rng: &mut R) -> Option<f64> {
    if rng.gen::<f64>() < mutation_rate {
        Some(rng.gen::<f64>())
    } else {
        None
    }
}
