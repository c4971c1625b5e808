//! Input validation policy
//!
//! Two explicit policies are supported:
//!
//! - [`ValidationPolicy::Strict`]: the process count must lie in
//!   `[1, max_processes]` and every burst time must be positive.
//! - [`ValidationPolicy::Lenient`]: keeps the classic calculator's
//!   permissive behavior where it is safe to do so. A count above the
//!   capacity is capped (with a warning), and zero-length bursts are
//!   accepted. Non-numeric input, a count of zero or less, and negative
//!   bursts are still rejected.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Classic storage bound of the calculator
pub const DEFAULT_MAX_PROCESSES: usize = 20;

/// How strictly process counts and burst times are checked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Reject out-of-range counts and non-positive bursts (default)
    #[default]
    Strict,
    /// Cap oversized counts and accept zero bursts
    Lenient,
}

/// Limits applied while reading a workload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub policy: ValidationPolicy,
    pub max_processes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            policy: ValidationPolicy::Strict,
            max_processes: DEFAULT_MAX_PROCESSES,
        }
    }
}

impl Limits {
    pub fn new(policy: ValidationPolicy, max_processes: usize) -> Self {
        Self {
            policy,
            max_processes,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.policy == ValidationPolicy::Strict
    }
}
