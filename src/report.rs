//! Report rendering for computed schedules
//!
//! The text format reproduces the classic calculator's table byte for
//! byte (tab separated columns, blank line before the table and before
//! the averages) so it can be diffed against golden output.

use crate::cli::OutputFormat;
use crate::csv_output::CsvReport;
use crate::fcfs::Schedule;
use crate::json_output::JsonReport;

/// Render `schedule` as the classic tab-separated table plus averages
pub fn to_text(schedule: &Schedule) -> String {
    let mut output = String::from("\nProcess\tBurst Time\tWaiting Time\tTurnaround Time\n");

    for record in schedule.records() {
        output.push_str(&format!(
            "{}\t{}\t\t{}\t\t{}\n",
            record.label(),
            record.burst,
            record.waiting,
            record.turnaround
        ));
    }

    output.push_str(&format!(
        "\nAverage Waiting Time = {:.2}",
        schedule.average_waiting()
    ));
    output.push_str(&format!(
        "\nAverage Turnaround Time = {:.2}\n",
        schedule.average_turnaround()
    ));

    output
}

/// Render `schedule` in the requested output format
pub fn render(schedule: &Schedule, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(to_text(schedule)),
        OutputFormat::Json => {
            let mut json = JsonReport::from_schedule(schedule).to_json()?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Csv => Ok(CsvReport::from_schedule(schedule).to_csv()),
    }
}
