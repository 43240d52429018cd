mod generate;
mod schedule;

pub use generate::generate;
pub use schedule::schedule;
