pub mod genome;
pub mod phenotype;
pub mod operators;
pub mod population;
pub mod mixing_engine;
pub mod progress;

pub use genome::{Genome, GENOME_LENGTH};
pub use phenotype::{decode, Phenotype};
pub use operators::{crossover, Offspring};
pub use population::{Member, Population};
pub use mixing_engine::{tick, MixingEngine};
pub use progress::{LoggingObserver, NullObserver, TickObserver};
