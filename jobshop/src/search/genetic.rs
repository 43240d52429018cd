use log::{debug, info, trace};
use rand::Rng;

use crate::{
    bounds,
    catalog::{JobCatalog, Time},
    chromosome::{Chromosome, ChromosomeCodec},
    population::PopulationManager,
    simulator::{Evaluation, Simulator},
    Error,
};

use super::{
    GenerationReport, GenerationStats, OptimizedSchedule, ReplacementPolicy, SearchOptions,
};

struct Incumbent {
    chromosome: Chromosome,
    evaluation: Evaluation,
}

/// Genetic search over operation-based chromosomes.
///
/// Created with a random population ([`GeneticSearch::new`]), advanced one
/// generation at a time ([`GeneticSearch::step`]) and closed with
/// [`GeneticSearch::finish`], which returns the best chromosome ever evaluated.
pub struct GeneticSearch<'a, R: Rng> {
    options: SearchOptions,
    rng: R,
    manager: PopulationManager<'a>,
    simulator: Simulator<'a>,
    population: Vec<Chromosome>,
    // makespans of `population` when they are already known
    makespans: Option<Vec<Time>>,
    generation: usize,
    lower_bound: Time,
    best: Option<Incumbent>,
    history: Vec<GenerationStats>,
    stopped: bool,
}

impl<'a, R: Rng> GeneticSearch<'a, R> {
    pub fn new(
        catalog: &'a JobCatalog,
        options: SearchOptions,
        mut rng: R,
    ) -> Result<Self, Error> {
        options.validate()?;

        let population =
            ChromosomeCodec::new(catalog).random_population(options.population_size, &mut rng);
        let lower_bound = bounds::lower_bound(catalog);

        info!(
            "searching {} jobs with {} operations on {} machines",
            catalog.jobs().len(),
            catalog.total_operations(),
            catalog.machine_count()
        );
        info!("lower bound: {lower_bound}");
        debug!("options: {options:?}");

        Ok(Self {
            manager: PopulationManager::new(catalog, &options),
            simulator: Simulator::new(catalog),
            options,
            rng,
            population,
            makespans: None,
            generation: 0,
            lower_bound,
            best: None,
            history: vec![],
            stopped: false,
        })
    }

    pub fn population(&self) -> &[Chromosome] {
        &self.population
    }

    /// Number of generations bred so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn lower_bound(&self) -> Time {
        self.lower_bound
    }

    /// Best makespan evaluated so far, `None` before the first generation.
    pub fn best_makespan(&self) -> Option<Time> {
        self.best.as_ref().map(|best| best.evaluation.makespan)
    }

    /// Breeds one generation and reports the best of the population the
    /// parents were selected from.
    ///
    /// Returns `None` once all generations ran or the lower bound was reached.
    pub fn step(&mut self) -> Option<GenerationReport> {
        if self.stopped || self.generation >= self.options.generations {
            return None;
        }

        let makespans = self.current_makespans();
        let best_index = index_of_min(&makespans);
        let evaluation = self.simulator.evaluate(&self.population[best_index]);
        self.offer(best_index, &evaluation);

        let mut offspring = self
            .manager
            .breed(&self.population, &makespans, &mut self.rng);

        self.makespans = match self.options.replacement {
            ReplacementPolicy::Generational => None,
            ReplacementPolicy::Elitist => {
                let mut offspring_makespans: Vec<Time> = offspring
                    .iter()
                    .map(|child| self.simulator.makespan(child))
                    .collect();
                let worst_index = index_of_max(&offspring_makespans);

                offspring[worst_index] = self.population[best_index].clone();
                offspring_makespans[worst_index] = makespans[best_index];

                Some(offspring_makespans)
            }
        };
        self.population = offspring;

        let stats = GenerationStats {
            generation: self.generation,
            best_makespan: makespans[best_index],
            mean_makespan: makespans.iter().sum::<Time>() as f64 / makespans.len() as f64,
            best_so_far: self.best_makespan().unwrap_or(makespans[best_index]),
        };

        info!(
            "Generation {}: best makespan = {} (mean {:.2}, best so far {})",
            stats.generation, stats.best_makespan, stats.mean_makespan, stats.best_so_far
        );
        debug!("schedule: {:?}", evaluation.schedule);

        self.history.push(stats.clone());
        self.generation += 1;

        if self.options.stop_at_lower_bound && stats.best_so_far <= self.lower_bound {
            info!("Stopping search as lower bound has been reached");
            self.stopped = true;
        }

        Some(GenerationReport {
            stats,
            schedule: evaluation.schedule,
        })
    }

    /// Evaluates the final population and returns the best chromosome seen.
    pub fn finish(mut self) -> OptimizedSchedule {
        let makespans = self.current_makespans();
        let best_index = index_of_min(&makespans);
        let evaluation = self.simulator.evaluate(&self.population[best_index]);
        let chromosome = self.population.swap_remove(best_index);

        let best = match self.best {
            Some(best) if best.evaluation.makespan <= evaluation.makespan => best,
            _ => Incumbent {
                chromosome,
                evaluation,
            },
        };

        info!("best_schedule: {:?}", best.chromosome);
        info!("best_makespan: {}", best.evaluation.makespan);

        OptimizedSchedule {
            chromosome: best.chromosome,
            makespan: best.evaluation.makespan,
            schedule: best.evaluation.schedule,
            lower_bound: self.lower_bound,
            history: self.history,
        }
    }

    /// Steps until done, handing every report to `on_generation`.
    pub fn run<F>(mut self, mut on_generation: F) -> OptimizedSchedule
    where
        F: FnMut(&GenerationReport),
    {
        while let Some(report) = self.step() {
            on_generation(&report);
        }

        self.finish()
    }

    fn current_makespans(&mut self) -> Vec<Time> {
        match self.makespans.take() {
            Some(makespans) => makespans,
            None => self
                .population
                .iter()
                .map(|chromosome| self.simulator.makespan(chromosome))
                .collect(),
        }
    }

    fn offer(&mut self, index: usize, evaluation: &Evaluation) {
        let improves = self
            .best
            .as_ref()
            .map_or(true, |best| evaluation.makespan < best.evaluation.makespan);

        if improves {
            let chromosome = self.population[index].clone();
            trace!(
                "new best chromosome {chromosome:?} with makespan {}",
                evaluation.makespan
            );

            self.best = Some(Incumbent {
                chromosome,
                evaluation: evaluation.clone(),
            });
        }
    }
}

// first minimum wins
fn index_of_min(makespans: &[Time]) -> usize {
    let mut best = 0;
    for (index, makespan) in makespans.iter().enumerate().skip(1) {
        if *makespan < makespans[best] {
            best = index;
        }
    }
    best
}

// last maximum wins
fn index_of_max(makespans: &[Time]) -> usize {
    let mut worst = 0;
    for (index, makespan) in makespans.iter().enumerate().skip(1) {
        if *makespan >= makespans[worst] {
            worst = index;
        }
    }
    worst
}
