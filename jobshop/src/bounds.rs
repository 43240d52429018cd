use crate::catalog::{JobCatalog, Time};

/// Compute the upper bound of the makespan by accumulating all durations,
/// i.e. running every operation one after another.
pub fn upper_bound(catalog: &JobCatalog) -> Time {
    catalog.jobs().iter().map(|job| job.total_duration()).sum()
}

/// Find the lower bound of the makespan: no schedule finishes before its
/// longest job or before its busiest machine has worked off its load.
pub fn lower_bound(catalog: &JobCatalog) -> Time {
    let longest_job = catalog
        .jobs()
        .iter()
        .map(|job| job.total_duration())
        .max()
        .unwrap_or(0);

    let mut machine_load: Vec<Time> = vec![0; catalog.machine_count() as usize];
    for operation in catalog.jobs().iter().flat_map(|job| job.operations.iter()) {
        machine_load[(operation.machine - 1) as usize] += operation.duration;
    }
    let busiest_machine = machine_load.into_iter().max().unwrap_or(0);

    longest_job.max(busiest_machine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::{three_by_three, two_by_two};

    #[test]
    fn bounds_of_two_by_two() {
        let catalog = two_by_two();

        // M1 carries 3 + 4, the jobs take 5 and 6
        assert_eq!(lower_bound(&catalog), 7);
        assert_eq!(upper_bound(&catalog), 11);
    }

    #[test]
    fn bounds_of_three_by_three() {
        let catalog = three_by_three();

        // M2 carries 2 + 4 + 4 = 10, the longest job takes 7
        assert_eq!(lower_bound(&catalog), 10);
        assert_eq!(upper_bound(&catalog), 21);
    }
}
