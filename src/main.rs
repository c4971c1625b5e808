use anyhow::{Context, Result};
use clap::Parser;
use fcfs_calc::{
    cli::{Cli, OutputFormat},
    config::{FileConfig, Settings},
    fcfs::Schedule,
    input, report,
};
use std::fs::File;
use std::io::{self, BufReader, Write};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Collect burst times from positional arguments, a file, or stdin
fn read_bursts(args: &Cli, settings: &Settings) -> Result<Vec<u64>> {
    let limits = &settings.limits;

    if !args.bursts.is_empty() {
        return Ok(input::bursts_from_tokens(&args.bursts, limits)?);
    }

    if let Some(path) = &args.input {
        let file = File::open(path)
            .with_context(|| format!("Failed to open input file: {}", path.display()))?;
        return Ok(input::read_workload(
            BufReader::new(file),
            &mut io::sink(),
            limits,
        )?);
    }

    // Prompts only make sense above the plain-text table
    let stdin = io::stdin().lock();
    if settings.prompt && settings.format == OutputFormat::Text {
        Ok(input::read_workload(stdin, &mut io::stdout().lock(), limits)?)
    } else {
        Ok(input::read_workload(stdin, &mut io::sink(), limits)?)
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let file_config = match &args.config {
        Some(path) => Some(FileConfig::from_file(path)?),
        None => None,
    };
    let settings = Settings::resolve(&args, file_config.as_ref())?;

    let bursts = read_bursts(&args, &settings)?;
    let schedule = Schedule::compute(&bursts)?;
    let output = report::render(&schedule, settings.format)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
