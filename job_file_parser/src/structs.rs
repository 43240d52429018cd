use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobFile {
    pub jobs: Vec<JobRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    pub job_id: u32,
    // operations in processing order
    pub operations: Vec<OperationRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationRecord {
    pub machine: u32,
    pub processing_time: u32,
}

impl JobFile {
    /// Highest machine number referenced by any operation, 0 for a file without operations.
    pub fn max_machine(&self) -> u32 {
        self.jobs
            .iter()
            .flat_map(|job| job.operations.iter())
            .map(|operation| operation.machine)
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for OperationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{}[{}]", self.machine, self.processing_time)
    }
}

impl fmt::Display for JobRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Job_{}: ", self.job_id)?;

        for (index, operation) in self.operations.iter().enumerate() {
            if index > 0 {
                f.write_str("->")?;
            }
            write!(f, "{operation}")?;
        }

        Ok(())
    }
}

impl fmt::Display for JobFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for job in &self.jobs {
            writeln!(f, "{job}")?;
        }

        Ok(())
    }
}
