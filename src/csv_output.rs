//! CSV output format for computed schedules
//!
//! One row per process followed by an `average` row whose waiting and
//! turnaround columns hold the two-decimal averages.

use crate::fcfs::{ProcessRecord, Schedule};

/// CSV output formatter
#[derive(Debug)]
pub struct CsvReport {
    records: Vec<ProcessRecord>,
    average_waiting: f64,
    average_turnaround: f64,
}

impl CsvReport {
    pub fn from_schedule(schedule: &Schedule) -> Self {
        Self {
            records: schedule.records().to_vec(),
            average_waiting: schedule.average_waiting(),
            average_turnaround: schedule.average_turnaround(),
        }
    }

    fn header() -> &'static str {
        "process,burst,waiting,turnaround"
    }

    fn format_record(record: &ProcessRecord) -> String {
        [
            record.label(),
            record.burst.to_string(),
            record.waiting.to_string(),
            record.turnaround.to_string(),
        ]
        .join(",")
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(Self::header());
        output.push('\n');

        for record in &self.records {
            output.push_str(&Self::format_record(record));
            output.push('\n');
        }

        // Burst column left empty: an average burst is not part of the report
        output.push_str(&format!(
            "average,,{:.2},{:.2}\n",
            self.average_waiting, self.average_turnaround
        ));

        output
    }
}
