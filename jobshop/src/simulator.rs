//! Fitness function: decodes a chromosome into a semi-active schedule.
//!
//! The chromosome is read as a dispatch list. Each entry starts the next
//! pending operation of its job as soon as both the job and the machine are
//! free, so conflicts resolve first-come-first-served in chromosome order.

use log::{trace, warn};
use serde::Serialize;

use crate::catalog::{JobCatalog, JobId, MachineId, Time};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduledOperation {
    pub job: JobId,
    /// Zero based position of the operation inside its job.
    pub operation: usize,
    pub machine: MachineId,
    pub start: Time,
    pub end: Time,
}

pub type Schedule = Vec<ScheduledOperation>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub makespan: Time,
    pub schedule: Schedule,
}

pub struct Simulator<'a> {
    catalog: &'a JobCatalog,
}

impl<'a> Simulator<'a> {
    pub fn new(catalog: &'a JobCatalog) -> Self {
        Self { catalog }
    }

    /// Makespan and the full schedule of `chromosome`.
    pub fn evaluate(&self, chromosome: &[JobId]) -> Evaluation {
        let mut schedule = Vec::with_capacity(chromosome.len());
        let makespan = self.simulate(chromosome, |operation| schedule.push(operation));

        Evaluation { makespan, schedule }
    }

    /// Same makespan as [`Simulator::evaluate`] without materializing the schedule.
    pub fn makespan(&self, chromosome: &[JobId]) -> Time {
        self.simulate(chromosome, |_| {})
    }

    fn simulate<F>(&self, chromosome: &[JobId], mut on_scheduled: F) -> Time
    where
        F: FnMut(ScheduledOperation),
    {
        let jobs = self.catalog.jobs();

        let mut machine_available_at: Vec<Time> = vec![0; self.catalog.machine_count() as usize];
        let mut job_ready_at: Vec<Time> = vec![0; jobs.len()];
        let mut next_operation: Vec<usize> = vec![0; jobs.len()];

        for (position, &job_id) in chromosome.iter().enumerate() {
            let Some(job_index) = self.catalog.index_of(job_id) else {
                warn!("skipping unknown job {job_id} at position {position}");
                continue;
            };

            let operation_index = next_operation[job_index];
            let Some(operation) = jobs[job_index].operations.get(operation_index) else {
                // only reachable when the chromosome breaks the multiset invariant
                warn!(
                    "skipping surplus occurrence of job {job_id} at position {position}, all {operation_index} operations already scheduled"
                );
                continue;
            };

            let machine_slot = (operation.machine - 1) as usize;
            let start = machine_available_at[machine_slot].max(job_ready_at[job_index]);
            let end = start + operation.duration;

            machine_available_at[machine_slot] = end;
            job_ready_at[job_index] = end;
            next_operation[job_index] += 1;

            on_scheduled(ScheduledOperation {
                job: job_id,
                operation: operation_index,
                machine: operation.machine,
                start,
                end,
            });
        }

        trace!("job completion times: {job_ready_at:?}");

        job_ready_at.into_iter().max().unwrap_or(0)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use hashbrown::HashMap;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{
        catalog::tests::{three_by_three, two_by_two},
        chromosome::ChromosomeCodec,
    };

    /// Panics unless `schedule` respects job order, machine capacity and durations.
    pub(crate) fn assert_feasible(catalog: &JobCatalog, schedule: &[ScheduledOperation]) {
        let mut last_by_job: HashMap<JobId, (usize, Time)> = HashMap::new();

        for scheduled in schedule {
            let operation = catalog.job(scheduled.job).unwrap().operations[scheduled.operation];

            assert_eq!(operation.machine, scheduled.machine);
            assert_eq!(scheduled.end - scheduled.start, operation.duration);

            match last_by_job.get(&scheduled.job) {
                Some(&(previous, previous_end)) => {
                    assert_eq!(scheduled.operation, previous + 1);
                    assert!(scheduled.start >= previous_end);
                }
                None => assert_eq!(scheduled.operation, 0),
            }
            last_by_job.insert(scheduled.job, (scheduled.operation, scheduled.end));
        }

        for (i, a) in schedule.iter().enumerate() {
            for b in &schedule[i + 1..] {
                if a.machine == b.machine {
                    assert!(
                        a.end <= b.start || b.end <= a.start,
                        "{a:?} overlaps {b:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn decodes_reference_scenario() {
        let catalog = two_by_two();
        let simulator = Simulator::new(&catalog);

        let evaluation = simulator.evaluate(&[1, 1, 2, 2]);

        let tuples: Vec<_> = evaluation
            .schedule
            .iter()
            .map(|op| (op.job, op.machine, op.start, op.end))
            .collect();
        assert_eq!(tuples, vec![(1, 1, 0, 3), (1, 2, 3, 5), (2, 2, 0, 2), (2, 1, 5, 9)]);
        assert_eq!(evaluation.makespan, 9);
        assert_feasible(&catalog, &evaluation.schedule);
    }

    #[test]
    fn interleaved_order_shortens_makespan() {
        let catalog = two_by_two();
        let simulator = Simulator::new(&catalog);

        // J2 grabs M2 first, J1 runs on M1 in parallel
        let evaluation = simulator.evaluate(&[2, 1, 1, 2]);

        assert_eq!(evaluation.makespan, 7);
        assert_eq!(simulator.makespan(&[2, 1, 1, 2]), 7);
        assert_feasible(&catalog, &evaluation.schedule);
    }

    #[test]
    fn skips_surplus_occurrences() {
        let catalog = two_by_two();
        let simulator = Simulator::new(&catalog);

        let evaluation = simulator.evaluate(&[1, 1, 1, 2, 2, 9]);

        assert_eq!(evaluation.schedule.len(), 4);
        assert_eq!(evaluation.makespan, 9);
    }

    #[test]
    fn empty_chromosome_has_zero_makespan() {
        let catalog = two_by_two();

        let evaluation = Simulator::new(&catalog).evaluate(&[]);

        assert_eq!(evaluation.makespan, 0);
        assert!(evaluation.schedule.is_empty());
    }

    #[test]
    fn random_chromosomes_decode_to_feasible_schedules() {
        let catalog = three_by_three();
        let codec = ChromosomeCodec::new(&catalog);
        let simulator = Simulator::new(&catalog);
        let mut rng = StdRng::seed_from_u64(3);

        for chromosome in codec.random_population(50, &mut rng) {
            let evaluation = simulator.evaluate(&chromosome);

            assert_eq!(evaluation.schedule.len(), catalog.total_operations());
            assert_eq!(
                evaluation.makespan,
                evaluation.schedule.iter().map(|op| op.end).max().unwrap()
            );
            assert_feasible(&catalog, &evaluation.schedule);
            assert_eq!(simulator.evaluate(&chromosome), evaluation);
        }
    }
}
