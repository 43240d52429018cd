use rand::{seq::SliceRandom, Rng};

use crate::{
    catalog::{Job, JobCatalog, JobId, MachineId, Operation, Time},
    Error,
};

/// Random square-ish job shop instance.
///
/// Every job visits each of the `machines` exactly once in a random order,
/// with durations drawn from `1..=max_duration`.
pub fn random_catalog<R: Rng + ?Sized>(
    rng: &mut R,
    jobs: u32,
    machines: u32,
    max_duration: Time,
) -> Result<JobCatalog, Error> {
    let max_duration = max_duration.max(1);

    let jobs = (1..=jobs)
        .map(|id: JobId| {
            let mut route: Vec<MachineId> = (1..=machines).collect();
            route.shuffle(rng);

            let operations = route
                .into_iter()
                .map(|machine| Operation {
                    machine,
                    duration: rng.gen_range(1..=max_duration),
                })
                .collect();

            Job::new(id, operations)
        })
        .collect();

    JobCatalog::new(jobs, machines)
}
