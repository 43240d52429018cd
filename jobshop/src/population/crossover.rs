use log::{trace, warn};

use crate::{
    catalog::{JobCatalog, JobId},
    chromosome::{occurrence_counts, Chromosome},
};

/// Swaps the tails of both parents behind `point`.
///
/// The children usually break the multiset invariant and need a [`repair`].
pub fn single_point_crossover(
    parent_a: &[JobId],
    parent_b: &[JobId],
    point: usize,
) -> (Chromosome, Chromosome) {
    let point = point.min(parent_a.len()).min(parent_b.len());

    let child_a = parent_a[..point]
        .iter()
        .chain(&parent_b[point..])
        .copied()
        .collect();
    let child_b = parent_b[..point]
        .iter()
        .chain(&parent_a[point..])
        .copied()
        .collect();

    (child_a, child_b)
}

/// Restores the multiset invariant of `child`.
///
/// Jobs are visited in catalog order. Missing occurrences are appended at the
/// end, surplus occurrences are dropped starting with the earliest ones.
pub fn repair(catalog: &JobCatalog, child: &mut Chromosome) {
    let length = child.len();

    if child.iter().any(|job_id| catalog.index_of(*job_id).is_none()) {
        warn!("dropping unknown job ids from chromosome {child:?}");
        child.retain(|job_id| catalog.index_of(*job_id).is_some());
    }

    let counts = occurrence_counts(child);

    for job in catalog.jobs() {
        let expected = job.operations.len();
        let current = counts.get(&job.id).copied().unwrap_or_default();

        if current < expected {
            child.extend(std::iter::repeat(job.id).take(expected - current));
        } else if current > expected {
            let mut surplus = current - expected;
            child.retain(|&job_id| {
                if job_id == job.id && surplus > 0 {
                    surplus -= 1;
                    false
                } else {
                    true
                }
            });
        }
    }

    trace!("repaired chromosome of length {length} into {child:?}");
}
