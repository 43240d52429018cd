use thiserror::Error;

use crate::catalog::{JobId, MachineId};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    // configuration
    #[error("population size must be positive")]
    PopulationSize,
    #[error("number of generations must be positive")]
    Generations,
    #[error("number of machines must be positive")]
    MachineCount,
    #[error("mutation rate {0} is not a probability in [0, 1]")]
    MutationRate(f64),
    #[error("tournament size {size} must be between 1 and the population size {population_size}")]
    TournamentSize { size: usize, population_size: usize },

    // job data
    #[error("job catalog contains no jobs")]
    EmptyCatalog,
    #[error("job id must be positive")]
    InvalidJobId,
    #[error("job {0} is defined more than once")]
    DuplicateJob(JobId),
    #[error("job {0} has no operations")]
    EmptyJob(JobId),
    // operations are numbered from 1 in job data errors
    #[error("operation {operation} of job {job} uses machine {machine}, expected 1..={machine_count}")]
    UnknownMachine {
        job: JobId,
        operation: usize,
        machine: MachineId,
        machine_count: u32,
    },
    #[error("operation {operation} of job {job} has a zero duration")]
    ZeroDuration { job: JobId, operation: usize },
}

impl Error {
    /// Whether the error stems from search parameters rather than job data.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Error::PopulationSize
                | Error::Generations
                | Error::MachineCount
                | Error::MutationRate(_)
                | Error::TournamentSize { .. }
        )
    }
}
