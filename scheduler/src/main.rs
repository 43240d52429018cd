#![forbid(unsafe_code)]
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::Verbosity;
use jobshop::search::ReplacementPolicy;
use log::{debug, error};

mod commands;
mod gantt;

#[derive(Debug, Parser)]
#[command(author, version)]
/// Genetic job shop scheduler
struct App {
    #[command(flatten)]
    verbose: Verbosity,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search a low-makespan schedule for a job file
    Schedule(Schedule),
    /// Write a random job shop instance in the job file format
    Generate(Generate),
}

#[derive(Args, Debug)]
pub struct Schedule {
    /// Job file, one `Job_<id>: M<machine>[<duration>]->...` line per job
    #[arg(required = true)]
    pub path: PathBuf,

    /// Number of machines, defaults to the highest machine used in the file
    #[arg(short, long)]
    pub machines: Option<u32>,

    #[arg(short, long, default_value_t = 50)]
    pub population_size: usize,

    #[arg(short, long, default_value_t = 100)]
    pub generations: usize,

    /// Probability of a swap mutation per child
    #[arg(long, default_value_t = 0.01)]
    pub mutation_rate: f64,

    #[arg(long, default_value_t = 3)]
    pub tournament_size: usize,

    #[arg(long, value_enum, default_value_t = Replacement::Elitist)]
    pub replacement: Replacement,

    /// Seed for reproducible runs
    #[arg(long, env = "JOBSHOP_SEED")]
    pub seed: Option<u64>,

    /// Stop as soon as a schedule reaches the makespan lower bound
    #[arg(long)]
    pub stop_at_lower_bound: bool,

    /// Write the best schedule as JSON
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Width of the Gantt chart in columns
    #[arg(long, default_value_t = 80)]
    pub width: usize,
}

#[derive(Args, Debug)]
pub struct Generate {
    /// Target file for the job definitions
    #[arg(required = true)]
    pub output: PathBuf,

    #[arg(short, long, default_value_t = 10)]
    pub jobs: u32,

    #[arg(short, long, default_value_t = 5)]
    pub machines: u32,

    #[arg(long, default_value_t = 20)]
    pub max_duration: u32,

    #[arg(long, env = "JOBSHOP_SEED")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Replacement {
    Elitist,
    Generational,
}

impl From<Replacement> for ReplacementPolicy {
    fn from(replacement: Replacement) -> Self {
        match replacement {
            Replacement::Elitist => ReplacementPolicy::Elitist,
            Replacement::Generational => ReplacementPolicy::Generational,
        }
    }
}

fn main() {
    let args: App = App::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    debug!("{args:?}");

    if let Err(err) = match args.command {
        Commands::Schedule(schedule) => commands::schedule(schedule),
        Commands::Generate(generate) => commands::generate(generate),
    } {
        error!("An error occurred: {:#}", err);
        std::process::exit(1);
    }
}
