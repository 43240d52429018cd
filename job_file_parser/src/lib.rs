// Job definitions are line based:
//   Job_1: M1[3]->M2[2]
//   Job_2: M2[2]->M1[4]

use std::collections::HashSet;

use chumsky::{prelude::*, Parser};
use structs::{JobFile, JobRecord, OperationRecord};
use thiserror::Error;

pub mod structs;

#[derive(Debug, Error)]
pub enum JobFileParseError {
    #[error("ParseError occurred: {}", format_errors(.0))]
    ParseError(Vec<Simple<char>>),
    #[error("Job {0} is defined more than once")]
    DuplicateJob(u32),
}

fn format_errors(errors: &[Simple<char>]) -> String {
    errors
        .iter()
        .map(|error| format!("{error} at {:?}", error.span()))
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn parse_job_file(content: &str) -> Result<JobFile, JobFileParseError> {
    let jobs = crate::job_file_parser()
        .parse(content)
        .map_err(JobFileParseError::ParseError)?;

    let mut seen = HashSet::with_capacity(jobs.len());
    for job in &jobs {
        if !seen.insert(job.job_id) {
            return Err(JobFileParseError::DuplicateJob(job.job_id));
        }
    }

    Ok(JobFile { jobs })
}

pub(crate) fn number_parser() -> impl Parser<char, u32, Error = Simple<char>> {
    text::int(10)
        .try_map(|digits: String, span| {
            digits
                .parse::<u32>()
                .map_err(|err| Simple::custom(span, format!("{digits}: {err}")))
        })
        .labelled("number")
}

pub(crate) fn operation_parser() -> impl Parser<char, OperationRecord, Error = Simple<char>> {
    let processing_time = number_parser()
        .padded()
        .delimited_by(just('['), just(']'))
        .labelled("processing time");

    just('M')
        .ignore_then(number_parser())
        .then(processing_time)
        .map(|(machine, processing_time)| OperationRecord {
            machine,
            processing_time,
        })
        .labelled("operation")
}

pub(crate) fn job_parser() -> impl Parser<char, JobRecord, Error = Simple<char>> {
    let label = filter(char::is_ascii_alphabetic)
        .repeated()
        .at_least(1)
        .then_ignore(just('_'))
        .ignored()
        .labelled("job label");

    label
        .ignore_then(number_parser())
        .then_ignore(just(':').padded())
        .then(
            operation_parser()
                .separated_by(just("->").padded())
                .at_least(1),
        )
        .map(|(job_id, operations)| JobRecord { job_id, operations })
        .labelled("job")
}

pub(crate) fn job_file_parser() -> impl Parser<char, Vec<JobRecord>, Error = Simple<char>> {
    job_parser()
        .padded()
        .repeated()
        .padded()
        .then_ignore(end())
}
