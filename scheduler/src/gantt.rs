//! Plain text Gantt chart, one row per machine.

use std::collections::BTreeSet;

use jobshop::{catalog::JobId, simulator::ScheduledOperation};

const SYMBOLS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

pub fn render(schedule: &[ScheduledOperation], machine_count: u32, width: usize) -> String {
    let makespan = schedule.iter().map(|op| op.end).max().unwrap_or(0);
    let width = width.max(1) as u64;
    // time units per column
    let scale = ((makespan + width - 1) / width).max(1);
    let columns = ((makespan + scale - 1) / scale) as usize;

    let jobs: Vec<JobId> = schedule
        .iter()
        .map(|op| op.job)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let symbol = |job: JobId| {
        let index = jobs.binary_search(&job).unwrap_or_default();
        SYMBOLS[index % SYMBOLS.len()] as char
    };

    let label_width = format!("M{machine_count}").len();
    let mut output = String::new();

    for machine in 1..=machine_count {
        let mut row = vec!['.'; columns];

        for op in schedule.iter().filter(|op| op.machine == machine) {
            let from = (op.start / scale) as usize;
            let to = ((op.end + scale - 1) / scale) as usize;
            for cell in &mut row[from..to.min(columns)] {
                *cell = symbol(op.job);
            }
        }

        let label = format!("M{machine}");
        output.push_str(&format!(
            "{label:<label_width$} |{}|\n",
            row.into_iter().collect::<String>()
        ));
    }

    output.push_str(&format!(
        "{:<label_width$}  0..{makespan}, {scale} per column\n",
        ""
    ));

    let legend: Vec<String> = jobs
        .iter()
        .map(|&job| format!("{} = Job {job}", symbol(job)))
        .collect();
    output.push_str(&legend.join(", "));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduled(job: JobId, machine: u32, start: u64, end: u64) -> ScheduledOperation {
        ScheduledOperation {
            job,
            operation: 0,
            machine,
            start,
            end,
        }
    }

    #[test]
    fn renders_one_row_per_machine() {
        let schedule = vec![
            scheduled(1, 1, 0, 3),
            scheduled(1, 2, 3, 5),
            scheduled(2, 2, 0, 2),
            scheduled(2, 1, 5, 9),
        ];

        let chart = render(&schedule, 2, 80);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines[0], "M1 |AAA..BBBB|");
        assert_eq!(lines[1], "M2 |BB.AA....|");
        assert_eq!(lines[2], "    0..9, 1 per column");
        assert_eq!(lines[3], "A = Job 1, B = Job 2");
    }

    #[test]
    fn scales_long_schedules() {
        let schedule = vec![scheduled(4, 1, 0, 100), scheduled(7, 1, 100, 200)];

        let chart = render(&schedule, 1, 20);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines[0], format!("M1 |{}{}|", "A".repeat(10), "B".repeat(10)));
        assert!(lines[1].contains("10 per column"));
    }

    #[test]
    fn empty_schedule_renders_idle_machines() {
        let chart = render(&[], 2, 10);

        assert!(chart.starts_with("M1 ||\nM2 ||\n"));
    }
}
