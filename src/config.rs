//! Optional TOML configuration
//!
//! A config file supplies defaults that explicit command-line flags
//! override. Every key is optional.
//!
//! # Example fcfs.toml
//!
//! ```toml
//! policy = "lenient"
//! max_processes = 50
//! format = "csv"
//! prompt = false
//! ```

use crate::cli::{Cli, OutputFormat};
use crate::policy::{Limits, ValidationPolicy, DEFAULT_MAX_PROCESSES};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Contents of a config file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub policy: Option<ValidationPolicy>,
    pub max_processes: Option<usize>,
    pub format: Option<OutputFormat>,
    pub prompt: Option<bool>,
}

impl FileConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid TOML configuration")
    }
}

/// Effective settings after layering defaults, config file, and flags
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub limits: Limits,
    pub format: OutputFormat,
    pub prompt: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            format: OutputFormat::Text,
            prompt: true,
        }
    }
}

impl Settings {
    /// Resolve settings: built-in defaults, then `file`, then explicit flags
    pub fn resolve(cli: &Cli, file: Option<&FileConfig>) -> Result<Self> {
        let file = file.cloned().unwrap_or_default();

        let policy = cli.policy.or(file.policy).unwrap_or_default();
        let max_processes = cli
            .max_processes
            .or(file.max_processes)
            .unwrap_or(DEFAULT_MAX_PROCESSES);
        if max_processes == 0 {
            bail!("Invalid maximum process count: 0 (must be >= 1)");
        }

        let format = cli.format.or(file.format).unwrap_or(OutputFormat::Text);
        let prompt = !cli.no_prompt && file.prompt.unwrap_or(true);

        let settings = Self {
            limits: Limits::new(policy, max_processes),
            format,
            prompt,
        };
        tracing::debug!(?settings, "resolved settings");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("fcfs-calc").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults_without_config() {
        let settings = Settings::resolve(&cli(&[]), None).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config = FileConfig::from_str(
            r#"
policy = "lenient"
max_processes = 50
format = "csv"
prompt = false
"#,
        )
        .unwrap();
        assert_eq!(config.policy, Some(ValidationPolicy::Lenient));
        assert_eq!(config.max_processes, Some(50));
        assert_eq!(config.format, Some(OutputFormat::Csv));
        assert_eq!(config.prompt, Some(false));
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(FileConfig::from_str("").unwrap(), FileConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(FileConfig::from_str("quantum = 4").is_err());
    }

    #[test]
    fn test_config_applies_when_flags_absent() {
        let file = FileConfig {
            policy: Some(ValidationPolicy::Lenient),
            max_processes: Some(3),
            format: Some(OutputFormat::Json),
            prompt: Some(false),
        };
        let settings = Settings::resolve(&cli(&[]), Some(&file)).unwrap();
        assert_eq!(settings.limits, Limits::new(ValidationPolicy::Lenient, 3));
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(!settings.prompt);
    }

    #[test]
    fn test_flags_override_config() {
        let file = FileConfig {
            policy: Some(ValidationPolicy::Lenient),
            max_processes: Some(3),
            format: Some(OutputFormat::Json),
            prompt: None,
        };
        let settings = Settings::resolve(
            &cli(&["--policy", "strict", "--max-processes", "8", "--format", "text"]),
            Some(&file),
        )
        .unwrap();
        assert_eq!(settings.limits, Limits::new(ValidationPolicy::Strict, 8));
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(Settings::resolve(&cli(&["--max-processes", "0"]), None).is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "max_processes = 7").unwrap();
        let config = FileConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_processes, Some(7));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = FileConfig::from_file("/nonexistent/fcfs.toml").unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/fcfs.toml"));
    }
}
