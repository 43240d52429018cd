//! Operation-based permutation encoding.
//!
//! A chromosome lists job ids, one entry per operation. The k-th occurrence of
//! job `j` (scanning left to right) stands for the k-th operation of `j`.

use hashbrown::HashMap;
use rand::{seq::SliceRandom, Rng};

use crate::catalog::{JobCatalog, JobId};

pub type Chromosome = Vec<JobId>;

pub struct ChromosomeCodec<'a> {
    catalog: &'a JobCatalog,
}

impl<'a> ChromosomeCodec<'a> {
    pub fn new(catalog: &'a JobCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a JobCatalog {
        self.catalog
    }

    /// Each job id repeated once per operation, jobs in catalog order.
    pub fn initial_chromosome(&self) -> Chromosome {
        let mut chromosome = Vec::with_capacity(self.catalog.total_operations());

        for job in self.catalog.jobs() {
            chromosome.extend(std::iter::repeat(job.id).take(job.operations.len()));
        }

        chromosome
    }

    /// `size` independently shuffled copies of the initial chromosome.
    pub fn random_population<R: Rng + ?Sized>(&self, size: usize, rng: &mut R) -> Vec<Chromosome> {
        let initial = self.initial_chromosome();

        (0..size)
            .map(|_| {
                let mut chromosome = initial.clone();
                chromosome.shuffle(rng);
                chromosome
            })
            .collect()
    }

    /// Checks the multiset invariant: every job id occurs exactly as often as
    /// the job has operations, and nothing else occurs.
    pub fn is_valid(&self, chromosome: &[JobId]) -> bool {
        if chromosome.len() != self.catalog.total_operations() {
            return false;
        }

        let counts = occurrence_counts(chromosome);

        counts.len() == self.catalog.jobs().len()
            && self
                .catalog
                .jobs()
                .iter()
                .all(|job| counts.get(&job.id).copied().unwrap_or_default() == job.operations.len())
    }
}

pub fn occurrence_counts(chromosome: &[JobId]) -> HashMap<JobId, usize> {
    let mut counts = HashMap::new();

    for job_id in chromosome {
        *counts.entry(*job_id).or_insert(0) += 1;
    }

    counts
}
