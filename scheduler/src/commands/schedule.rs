use std::fs;

use anyhow::{Context, Result};
use job_file_parser::parse_job_file;
use jobshop::{catalog::JobCatalog, search::SearchOptions};
use log::{info, trace};

use crate::{gantt, Schedule};

pub fn schedule(args: Schedule) -> Result<()> {
    let contents = fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read job file {:?}", args.path))?;
    trace!("input file contents: {contents}");

    let job_file = parse_job_file(contents.as_str())?;
    trace!("parsed job file: {job_file:#?}");

    let machine_count = args.machines.unwrap_or_else(|| job_file.max_machine());
    let catalog = JobCatalog::from_job_file(&job_file, machine_count)?;

    let options = SearchOptions {
        population_size: args.population_size,
        generations: args.generations,
        mutation_rate: args.mutation_rate,
        tournament_size: args.tournament_size,
        replacement: args.replacement.into(),
        seed: args.seed,
        stop_at_lower_bound: args.stop_at_lower_bound,
    };

    let result = jobshop::schedule(&catalog, options)?;

    println!("{}", gantt::render(&result.schedule, machine_count, args.width));
    println!(
        "makespan: {} (lower bound {})",
        result.makespan, result.lower_bound
    );
    println!("chromosome: {:?}", result.chromosome);

    if let Some(output) = args.output {
        let writer = fs::File::create(&output)
            .with_context(|| format!("failed to create {output:?}"))?;
        serde_json::to_writer_pretty(&writer, &result)?;

        info!("Wrote best schedule to: {:?}", output);
    }

    Ok(())
}
