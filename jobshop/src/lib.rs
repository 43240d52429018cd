//! Genetic search for low-makespan job shop schedules.
//!
//! Chromosomes are dispatch orders over the operations of a
//! [`catalog::JobCatalog`]; [`search::GeneticSearch`] evolves a population of
//! them, rating each one by the makespan of its simulated schedule.

pub mod bounds;
pub mod catalog;
pub mod chromosome;
pub mod instance_gen;
pub mod population;
pub mod search;
pub mod simulator;

mod error;

pub use error::Error;
pub use search::schedule;
