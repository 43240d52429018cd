//! Breeds the next generation from tournament winners.

pub mod crossover;
pub mod mutation;
pub mod selection;

use rand::Rng;

pub use crossover::{repair, single_point_crossover};
pub use mutation::swap_mutation;
pub use selection::tournament_select;

use crate::{
    catalog::{JobCatalog, JobId, Time},
    chromosome::{Chromosome, ChromosomeCodec},
    search::SearchOptions,
};

pub struct PopulationManager<'a> {
    catalog: &'a JobCatalog,
    tournament_size: usize,
    mutation_rate: f64,
}

impl<'a> PopulationManager<'a> {
    pub fn new(catalog: &'a JobCatalog, options: &SearchOptions) -> Self {
        Self {
            catalog,
            tournament_size: options.tournament_size,
            mutation_rate: options.mutation_rate,
        }
    }

    /// Two parents, each the winner of an independent tournament.
    ///
    /// `makespans[i]` is the fitness of `population[i]`.
    pub fn select_parents<'p, R: Rng + ?Sized>(
        &self,
        population: &'p [Chromosome],
        makespans: &[Time],
        rng: &mut R,
    ) -> [&'p Chromosome; 2] {
        let first = tournament_select(makespans, self.tournament_size, rng);
        let second = tournament_select(makespans, self.tournament_size, rng);

        [&population[first], &population[second]]
    }

    /// Crosses both parents at a random cut point in `1..len` and repairs the children.
    ///
    /// Chromosomes shorter than two genes have no cut point, the parents are copied.
    pub fn crossover<R: Rng + ?Sized>(
        &self,
        parent_a: &[JobId],
        parent_b: &[JobId],
        rng: &mut R,
    ) -> (Chromosome, Chromosome) {
        let length = parent_a.len().min(parent_b.len());
        if length < 2 {
            return (parent_a.to_vec(), parent_b.to_vec());
        }

        let point = rng.gen_range(1..length);
        let (mut child_a, mut child_b) = single_point_crossover(parent_a, parent_b, point);

        repair(self.catalog, &mut child_a);
        repair(self.catalog, &mut child_b);

        (child_a, child_b)
    }

    pub fn mutate<R: Rng + ?Sized>(&self, chromosome: &mut Chromosome, rng: &mut R) -> bool {
        swap_mutation(chromosome, self.mutation_rate, rng)
    }

    /// Offspring buffer of the same size as `population`.
    ///
    /// Pairs of children are bred until the buffer is full; for an odd
    /// population the second child of the last pair is discarded.
    pub fn breed<R: Rng + ?Sized>(
        &self,
        population: &[Chromosome],
        makespans: &[Time],
        rng: &mut R,
    ) -> Vec<Chromosome> {
        let size = population.len();
        let mut offspring = Vec::with_capacity(size + 1);

        for _ in 0..(size + 1) / 2 {
            let [parent_a, parent_b] = self.select_parents(population, makespans, rng);
            let (mut child_a, mut child_b) = self.crossover(parent_a, parent_b, rng);

            self.mutate(&mut child_a, rng);
            self.mutate(&mut child_b, rng);

            debug_assert!(ChromosomeCodec::new(self.catalog).is_valid(&child_a));
            debug_assert!(ChromosomeCodec::new(self.catalog).is_valid(&child_b));

            offspring.push(child_a);
            offspring.push(child_b);
        }

        offspring.truncate(size);
        offspring
    }
}
