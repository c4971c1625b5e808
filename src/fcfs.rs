//! First-Come-First-Served scheduling metrics
//!
//! Processes run strictly in submission order with no gaps, so every
//! process waits for the combined burst time of everything ahead of it:
//!
//! - `waiting[0] = 0`
//! - `waiting[i] = waiting[i - 1] + burst[i - 1]`
//! - `turnaround[i] = waiting[i] + burst[i]`
//!
//! All values are derived in a single pass and never mutated afterwards.

use serde::Serialize;
use thiserror::Error;

/// Errors raised while deriving a schedule
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("No processes to schedule: averages are undefined for an empty workload")]
    Empty,

    #[error("Time overflow while scheduling P{process}")]
    Overflow { process: usize },
}

/// Metrics for a single process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessRecord {
    /// 1-based position in submission order (`P<id>`)
    pub id: usize,
    /// Execution time requested by the process
    pub burst: u64,
    /// Time spent ready but not running
    pub waiting: u64,
    /// Time from submission to completion (`waiting + burst`)
    pub turnaround: u64,
}

impl ProcessRecord {
    /// Display label, e.g. `P3`
    pub fn label(&self) -> String {
        format!("P{}", self.id)
    }
}

/// Complete FCFS schedule for one workload
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    records: Vec<ProcessRecord>,
    total_waiting: u64,
    total_turnaround: u64,
}

impl Schedule {
    /// Derive waiting and turnaround times for `bursts` in submission order
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Empty`] when `bursts` is empty and
    /// [`ScheduleError::Overflow`] when a running total does not fit in `u64`.
    ///
    /// # Example
    ///
    /// ```
    /// use fcfs_calc::fcfs::Schedule;
    ///
    /// let schedule = Schedule::compute(&[4, 3, 1]).unwrap();
    /// let waiting: Vec<u64> = schedule.records().iter().map(|r| r.waiting).collect();
    /// assert_eq!(waiting, vec![0, 4, 7]);
    /// assert_eq!(format!("{:.2}", schedule.average_waiting()), "3.67");
    /// ```
    pub fn compute(bursts: &[u64]) -> Result<Self, ScheduleError> {
        if bursts.is_empty() {
            return Err(ScheduleError::Empty);
        }

        let mut records = Vec::with_capacity(bursts.len());
        let mut total_waiting: u64 = 0;
        let mut total_turnaround: u64 = 0;
        let mut waiting: u64 = 0;

        for (index, &burst) in bursts.iter().enumerate() {
            let id = index + 1;
            let overflow = || ScheduleError::Overflow { process: id };

            let turnaround = waiting.checked_add(burst).ok_or_else(overflow)?;
            total_waiting = total_waiting.checked_add(waiting).ok_or_else(overflow)?;
            total_turnaround = total_turnaround
                .checked_add(turnaround)
                .ok_or_else(overflow)?;

            records.push(ProcessRecord {
                id,
                burst,
                waiting,
                turnaround,
            });

            // The next process starts exactly when this one completes
            waiting = turnaround;
        }

        tracing::debug!(
            processes = records.len(),
            total_waiting,
            total_turnaround,
            "computed FCFS schedule"
        );

        Ok(Self {
            records,
            total_waiting,
            total_turnaround,
        })
    }

    /// Per-process metrics in execution order
    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: an empty workload is rejected by [`Schedule::compute`]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_waiting(&self) -> u64 {
        self.total_waiting
    }

    pub fn total_turnaround(&self) -> u64 {
        self.total_turnaround
    }

    /// Mean waiting time as a floating-point quotient
    pub fn average_waiting(&self) -> f64 {
        self.total_waiting as f64 / self.len() as f64
    }

    /// Mean turnaround time as a floating-point quotient
    pub fn average_turnaround(&self) -> f64 {
        self.total_turnaround as f64 / self.len() as f64
    }

    /// Completion time of the last process
    pub fn makespan(&self) -> u64 {
        self.records.last().map(|r| r.turnaround).unwrap_or(0)
    }

    /// Processes completed per unit of time, `None` if every burst was zero
    pub fn throughput(&self) -> Option<f64> {
        match self.makespan() {
            0 => None,
            makespan => Some(self.len() as f64 / makespan as f64),
        }
    }
}
