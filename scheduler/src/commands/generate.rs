use anyhow::Result;
use job_file_parser::structs::{JobFile, JobRecord, OperationRecord};
use jobshop::{catalog::Time, instance_gen::random_catalog};
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use crate::Generate;

pub fn generate(args: Generate) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let catalog = random_catalog(
        &mut rng,
        args.jobs,
        args.machines,
        args.max_duration as Time,
    )?;

    let jobs = catalog
        .jobs()
        .iter()
        .map(|job| -> Result<JobRecord> {
            let operations = job
                .operations
                .iter()
                .map(|operation| -> Result<OperationRecord> {
                    Ok(OperationRecord {
                        machine: operation.machine,
                        processing_time: u32::try_from(operation.duration)?,
                    })
                })
                .collect::<Result<_>>()?;

            Ok(JobRecord {
                job_id: job.id,
                operations,
            })
        })
        .collect::<Result<_>>()?;

    std::fs::write(&args.output, JobFile { jobs }.to_string())?;

    info!("Wrote job file to: {:?}", args.output);

    Ok(())
}
