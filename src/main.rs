mod cli;

use std::io::{self, Write};

use anyhow::{Context, Result};
use brc_stats::{Aggregator, Error, Outcome};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let outcome = Aggregator::new()
        .run_path(&args.path)
        .with_context(|| format!("aggregation of {} failed", args.path.display()))?;

    print_outcome(&outcome).map_err(|source| Error::Write { source })?;
    Ok(())
}

fn print_outcome(outcome: &Outcome) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(outcome.summary_bytes())?;
    writeln!(out)?;
    writeln!(out, "Execution time: {:?}", outcome.elapsed())?;
    out.flush()
}

/// Diagnostics go to stderr so stdout carries only the summary and timing.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .init();
}
