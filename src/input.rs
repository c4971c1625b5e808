//! Workload input: token reading, parse-and-validate, interactive prompts
//!
//! Input is a stream of whitespace or newline delimited integers: the
//! process count first, then one burst time per process in submission
//! order. Tokens may be spread over any number of lines.

use crate::policy::{Limits, DEFAULT_MAX_PROCESSES};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use thiserror::Error;

/// Errors raised while reading or validating a workload
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid {what}: expected an integer, got '{token}'")]
    Malformed { what: String, token: String },

    #[error("Unexpected end of input while reading {what}")]
    UnexpectedEof { what: String },

    #[error("Process count {count} out of range (must be between 1 and {max})")]
    CountOutOfRange { count: i64, max: usize },

    #[error("Burst time for P{process} must be positive, got {value}")]
    NonPositiveBurst { process: usize, value: i64 },

    #[error("Burst time for P{process} cannot be negative, got {value}")]
    NegativeBurst { process: usize, value: i64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Splits a buffered reader into whitespace-delimited tokens
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once the stream is exhausted
    pub fn next_token(&mut self) -> Result<Option<String>, InputError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    fn expect_token(&mut self, what: &str) -> Result<String, InputError> {
        self.next_token()?.ok_or_else(|| InputError::UnexpectedEof {
            what: what.to_string(),
        })
    }
}

fn parse_integer(token: &str, what: &str) -> Result<i64, InputError> {
    token.parse::<i64>().map_err(|_| InputError::Malformed {
        what: what.to_string(),
        token: token.to_string(),
    })
}

/// Check a process count against the configured limits
///
/// Counts of zero or less are always rejected. Counts above
/// `max_processes` are rejected under the strict policy and capped
/// under the lenient one.
pub fn validate_count(count: i64, limits: &Limits) -> Result<usize, InputError> {
    let max = limits.max_processes;
    if count < 1 {
        return Err(InputError::CountOutOfRange { count, max });
    }

    let requested = usize::try_from(count).unwrap_or(usize::MAX);
    if requested <= max {
        return Ok(requested);
    }

    if limits.is_strict() {
        Err(InputError::CountOutOfRange { count, max })
    } else {
        tracing::warn!(
            requested,
            max,
            "process count exceeds capacity, only the first {} processes will be read",
            max
        );
        Ok(max)
    }
}

/// Check a burst time for process `P<process>` against the configured policy
pub fn validate_burst(process: usize, value: i64, limits: &Limits) -> Result<u64, InputError> {
    if limits.is_strict() && value <= 0 {
        return Err(InputError::NonPositiveBurst { process, value });
    }
    u64::try_from(value).map_err(|_| InputError::NegativeBurst { process, value })
}

pub fn parse_count(token: &str, limits: &Limits) -> Result<usize, InputError> {
    validate_count(parse_integer(token, "process count")?, limits)
}

pub fn parse_burst(process: usize, token: &str, limits: &Limits) -> Result<u64, InputError> {
    let what = format!("burst time for P{}", process);
    validate_burst(process, parse_integer(token, &what)?, limits)
}

/// Read a workload interactively
///
/// Prompts are written to `prompts` and flushed before every read, so an
/// interactive terminal sees them in the same order as the classic
/// calculator. Pass [`std::io::sink`] to suppress them.
pub fn read_workload<R: BufRead, W: Write>(
    reader: R,
    prompts: &mut W,
    limits: &Limits,
) -> Result<Vec<u64>, InputError> {
    let mut tokens = TokenReader::new(reader);

    write!(prompts, "Enter number of processes: ")?;
    prompts.flush()?;
    let count = parse_count(&tokens.expect_token("process count")?, limits)?;
    tracing::debug!(count, "read process count");

    writeln!(prompts, "Enter Burst Time for each process:")?;
    // Grows as bursts arrive; the declared count alone never sizes the buffer
    let mut bursts = Vec::with_capacity(count.min(DEFAULT_MAX_PROCESSES));
    for process in 1..=count {
        write!(prompts, "P{}: ", process)?;
        prompts.flush()?;
        let token = tokens.expect_token(&format!("burst time for P{}", process))?;
        bursts.push(parse_burst(process, &token, limits)?);
    }

    Ok(bursts)
}

/// Build a workload from burst times given directly (e.g. on the command line)
///
/// The process count is implied by the number of values and is checked
/// against the same limits as an interactively entered count.
pub fn bursts_from_tokens<S: AsRef<str>>(
    values: &[S],
    limits: &Limits,
) -> Result<Vec<u64>, InputError> {
    let requested = i64::try_from(values.len()).unwrap_or(i64::MAX);
    let count = validate_count(requested, limits)?;

    values
        .iter()
        .take(count)
        .enumerate()
        .map(|(index, token)| parse_burst(index + 1, token.as_ref(), limits))
        .collect()
}
