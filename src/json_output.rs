//! JSON output format for computed schedules
//!
//! `--format json` implementation

use crate::fcfs::Schedule;
use serde::{Deserialize, Serialize};

/// A single process row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonProcess {
    /// Process label (e.g., "P1")
    pub process: String,
    pub burst: u64,
    pub waiting: u64,
    pub turnaround: u64,
}

/// Complete JSON report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonReport {
    /// Processes in execution order
    pub processes: Vec<JsonProcess>,
    pub average_waiting: f64,
    pub average_turnaround: f64,
    /// Completion time of the last process
    pub makespan: u64,
    /// Processes per unit time (null when every burst is zero)
    pub throughput: Option<f64>,
}

impl JsonReport {
    pub fn from_schedule(schedule: &Schedule) -> Self {
        Self {
            processes: schedule
                .records()
                .iter()
                .map(|record| JsonProcess {
                    process: record.label(),
                    burst: record.burst,
                    waiting: record.waiting,
                    turnaround: record.turnaround,
                })
                .collect(),
            average_waiting: schedule.average_waiting(),
            average_turnaround: schedule.average_turnaround(),
            makespan: schedule.makespan(),
            throughput: schedule.throughput(),
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
