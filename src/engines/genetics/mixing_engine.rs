use crate::config::MixingConfig;
use crate::engines::genetics::{
    operators::{crossover, should_cross},
    population::Population,
};
use crate::types::TickReport;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Owns the mixing parameters and the random source; advances a population one tick at a time.
pub struct MixingEngine {
    config: MixingConfig,
    rng: StdRng,
    generation: u64,
}

impl MixingEngine {
    pub fn new(config: MixingConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            rng,
            generation: 0,
        }
    }

    /// Build the starting population from this engine's random source, so a seeded
    /// engine reproduces the whole run.
    pub fn seed_population(&mut self, grid_size: usize) -> Population {
        Population::grid(grid_size, &mut self.rng)
    }

    /// Advance the population by one generation step
    pub fn tick(&mut self, population: &mut Population) -> TickReport {
        let report = tick(
            population,
            self.config.crossover_rate,
            self.config.mutation_rate,
            &mut self.rng,
        );
        self.generation += 1;

        if !report.is_quiet() {
            log::debug!(
                "Tick {}: {} crossovers, {} mutations over {} pairs",
                self.generation,
                report.crossovers,
                report.mutations,
                report.attempts
            );
        }

        report
    }

    /// Ticks completed so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &MixingConfig {
        &self.config
    }
}

/// One pass over every ordered pair `(i, j)`, `i != j`.
///
/// Pairs are visited with `i` as the outer index. A member updated earlier in the
/// pass is read as a donor with its new genome by later pairs; the result depends
/// on this order.
///
/// # Panics
/// Panics if the population is empty.
pub fn tick<R: Rng>(
    population: &mut Population,
    crossover_rate: f64,
    mutation_rate: f64,
    rng: &mut R,
) -> TickReport {
    assert!(!population.is_empty(), "Cannot tick an empty population");

    let members = population.members_mut();
    let size = members.len();
    let mut report = TickReport {
        attempts: size * (size - 1),
        ..TickReport::default()
    };

    for recipient in 0..size {
        for donor in 0..size {
            if recipient == donor {
                continue;
            }
            if !should_cross(crossover_rate, rng) {
                continue;
            }

            let offspring = crossover(
                members[recipient].genome(),
                members[donor].genome(),
                mutation_rate,
                rng,
            );
            members[recipient].replace_genome(offspring.genome);

            report.crossovers += 1;
            report.mutations += offspring.mutations;
            log::trace!("Member {} absorbed genes from member {}", recipient, donor);
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::genetics::genome::Genome;
    use crate::engines::genetics::population::Member;
    use crate::types::GridPosition;

    fn config(crossover_rate: f64, mutation_rate: f64, seed: u64) -> MixingConfig {
        MixingConfig {
            crossover_rate,
            mutation_rate,
            seed: Some(seed),
        }
    }

    #[test]
    fn test_attempts_cover_ordered_pairs() {
        let mut engine = MixingEngine::new(config(0.0, 0.0, 1));
        let mut population = engine.seed_population(6);

        let report = engine.tick(&mut population);
        assert_eq!(report.attempts, 36 * 35);
        assert_eq!(report.crossovers, 0);
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn test_every_pair_crosses_when_forced() {
        let mut engine = MixingEngine::new(config(1.0, 0.0, 2));
        let mut population = engine.seed_population(3);

        let report = engine.tick(&mut population);
        assert_eq!(report.crossovers, 9 * 8);
        assert_eq!(report.mutations, 0);
    }

    #[test]
    fn test_same_seed_same_run() {
        let run = |seed| {
            let mut engine = MixingEngine::new(config(0.2, 0.05, seed));
            let mut population = engine.seed_population(4);
            for _ in 0..25 {
                engine.tick(&mut population);
            }
            population
        };

        assert_eq!(run(99), run(99));
    }

    #[test]
    fn test_matches_in_place_nested_loop() {
        // Reference: plain nested loop over a genome list, replacing in place, driven
        // by an identically seeded rng. Donors are read from the live list.
        let mut seed_rng = StdRng::seed_from_u64(21);
        let members: Vec<Member> = (0..4)
            .map(|i| Member::random(GridPosition::new(i, 0), &mut seed_rng))
            .collect();
        let mut reference: Vec<Genome> = members.iter().map(|m| m.genome().clone()).collect();
        let mut population = Population::from_members(members);

        let mut rng = StdRng::seed_from_u64(8);
        tick(&mut population, 0.5, 0.1, &mut rng);

        let mut rng = StdRng::seed_from_u64(8);
        for i in 0..reference.len() {
            for j in 0..reference.len() {
                if i != j && should_cross(0.5, &mut rng) {
                    reference[i] = crossover(&reference[i], &reference[j], 0.1, &mut rng).genome;
                }
            }
        }

        let actual: Vec<Genome> = population.iter().map(|m| m.genome().clone()).collect();
        assert_eq!(actual, reference);
    }

    #[test]
    fn test_single_member_never_crosses_with_itself() {
        let mut engine = MixingEngine::new(config(1.0, 1.0, 3));
        let mut population = engine.seed_population(1);
        let before = population.clone();

        let report = engine.tick(&mut population);
        assert_eq!(report.attempts, 0);
        assert_eq!(population, before);
    }
}
