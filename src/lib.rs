//! fcfs-calc - First-Come-First-Served CPU scheduling metrics
//!
//! This library derives per-process waiting and turnaround times for a
//! workload executed strictly in submission order, together with their
//! averages, and renders the result as a text table, JSON, or CSV.

pub mod cli;
pub mod config;
pub mod csv_output;
pub mod fcfs;
pub mod input;
pub mod json_output;
pub mod policy;
pub mod report;
