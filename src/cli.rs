//! CLI argument parsing for fcfs-calc

use crate::policy::ValidationPolicy;
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

/// Output format for the schedule report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tab-separated table (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "fcfs-calc")]
#[command(version)]
#[command(about = "First-Come-First-Served waiting and turnaround time calculator", long_about = None)]
pub struct Cli {
    /// Burst times in submission order (skips reading standard input)
    #[arg(value_name = "BURST", allow_negative_numbers = true)]
    pub bursts: Vec<String>,

    /// Read the process count and burst times from a file instead of stdin
    #[arg(short, long, value_name = "FILE", conflicts_with = "bursts")]
    pub input: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Validation policy for process counts and burst times [default: strict]
    #[arg(long = "policy", value_enum)]
    pub policy: Option<ValidationPolicy>,

    /// Maximum number of processes accepted [default: 20]
    #[arg(long = "max-processes", value_name = "N")]
    pub max_processes: Option<usize>,

    /// Do not print interactive prompts
    #[arg(long = "no-prompt")]
    pub no_prompt: bool,

    /// Load defaults from a TOML config file
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug tracing on stderr
    #[arg(long)]
    pub debug: bool,
}
