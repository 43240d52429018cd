pub mod genetic;

use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;

pub use genetic::GeneticSearch;

use crate::{
    catalog::{JobCatalog, Time},
    chromosome::Chromosome,
    simulator::Schedule,
    Error,
};

/// How the offspring buffer becomes the next population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ReplacementPolicy {
    /// The best chromosome of the parent population replaces the worst child,
    /// so the population best never gets worse.
    #[default]
    Elitist,
    /// The children replace the parents entirely; the population best may regress.
    Generational,
}

#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub population_size: usize,
    pub generations: usize,
    pub mutation_rate: f64,
    pub tournament_size: usize,
    pub replacement: ReplacementPolicy,
    pub seed: Option<u64>,
    pub stop_at_lower_bound: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            mutation_rate: 0.01,
            tournament_size: 3,
            replacement: ReplacementPolicy::default(),
            seed: None,
            stop_at_lower_bound: false,
        }
    }
}

impl SearchOptions {
    pub fn validate(&self) -> Result<(), Error> {
        if self.population_size == 0 {
            return Err(Error::PopulationSize);
        }

        if self.generations == 0 {
            return Err(Error::Generations);
        }

        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::MutationRate(self.mutation_rate));
        }

        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(Error::TournamentSize {
                size: self.tournament_size,
                population_size: self.population_size,
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationStats {
    pub generation: usize,
    /// Best makespan of the population the parents were selected from.
    pub best_makespan: Time,
    pub mean_makespan: f64,
    pub best_so_far: Time,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationReport {
    pub stats: GenerationStats,
    /// Schedule of the generation's best chromosome.
    pub schedule: Schedule,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizedSchedule {
    pub chromosome: Chromosome,
    pub makespan: Time,
    pub schedule: Schedule,
    pub lower_bound: Time,
    pub history: Vec<GenerationStats>,
}

/// Runs a complete search seeded from `options.seed`, or from system entropy
/// when no seed is given.
pub fn schedule(catalog: &JobCatalog, options: SearchOptions) -> Result<OptimizedSchedule, Error> {
    let rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let search = GeneticSearch::new(catalog, options, rng)?;

    Ok(search.run(|_| {}))
}
