use hashbrown::HashMap;
use job_file_parser::structs::JobFile;
use serde::Serialize;

use crate::Error;

pub type JobId = u32;
pub type MachineId = u32;
pub type Time = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Operation {
    pub machine: MachineId,
    pub duration: Time,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Job {
    pub id: JobId,
    pub operations: Vec<Operation>,
}

impl Job {
    pub fn new(id: JobId, operations: Vec<Operation>) -> Self {
        Self { id, operations }
    }

    /// Sum of all processing times, i.e. the job's length when it never waits.
    pub fn total_duration(&self) -> Time {
        self.operations.iter().map(|operation| operation.duration).sum()
    }
}

/// Immutable, validated set of jobs together with the machine count they run on.
#[derive(Debug, Clone)]
pub struct JobCatalog {
    jobs: Vec<Job>,
    machine_count: u32,
    job_to_index: HashMap<JobId, usize>,
    total_operations: usize,
}

impl JobCatalog {
    /// Validates the jobs against `machine_count`.
    ///
    /// Machines are numbered `1..=machine_count`. Every job needs a positive,
    /// unique id and at least one operation with a positive duration.
    pub fn new(jobs: Vec<Job>, machine_count: u32) -> Result<Self, Error> {
        if machine_count == 0 {
            return Err(Error::MachineCount);
        }

        if jobs.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let mut job_to_index = HashMap::with_capacity(jobs.len());

        for (index, job) in jobs.iter().enumerate() {
            if job.id == 0 {
                return Err(Error::InvalidJobId);
            }

            if job_to_index.insert(job.id, index).is_some() {
                return Err(Error::DuplicateJob(job.id));
            }

            if job.operations.is_empty() {
                return Err(Error::EmptyJob(job.id));
            }

            for (position, operation) in job.operations.iter().enumerate() {
                if operation.machine == 0 || operation.machine > machine_count {
                    return Err(Error::UnknownMachine {
                        job: job.id,
                        operation: position + 1,
                        machine: operation.machine,
                        machine_count,
                    });
                }

                if operation.duration == 0 {
                    return Err(Error::ZeroDuration {
                        job: job.id,
                        operation: position + 1,
                    });
                }
            }
        }

        let total_operations = jobs.iter().map(|job| job.operations.len()).sum();

        Ok(Self {
            jobs,
            machine_count,
            job_to_index,
            total_operations,
        })
    }

    pub fn from_job_file(file: &JobFile, machine_count: u32) -> Result<Self, Error> {
        let jobs = file
            .jobs
            .iter()
            .map(|record| {
                Job::new(
                    record.job_id,
                    record
                        .operations
                        .iter()
                        .map(|operation| Operation {
                            machine: operation.machine,
                            duration: operation.processing_time as Time,
                        })
                        .collect(),
                )
            })
            .collect();

        Self::new(jobs, machine_count)
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn machine_count(&self) -> u32 {
        self.machine_count
    }

    /// Number of operations over all jobs, which is also the chromosome length.
    pub fn total_operations(&self) -> usize {
        self.total_operations
    }

    pub fn index_of(&self, job_id: JobId) -> Option<usize> {
        self.job_to_index.get(&job_id).copied()
    }

    pub fn job(&self, job_id: JobId) -> Option<&Job> {
        self.index_of(job_id).map(|index| &self.jobs[index])
    }

    /// Operation count of a job, 0 for ids outside the catalog.
    pub fn operation_count(&self, job_id: JobId) -> usize {
        self.job(job_id)
            .map(|job| job.operations.len())
            .unwrap_or_default()
    }
}
