//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `probe_normalizer` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing summary output
//!
//! Normalized records go to stdout (or `--output`); everything else goes to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use probe_normalizer::initialization::init_logger_with;
use probe_normalizer::{run_batch, Config, SkipReason};

fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_batch(&config) {
        Ok(report) => {
            eprintln!(
                "Processed {} record{} ({} emitted, {} skipped: {} connection error, {} empty; {} invalid) in {:.1}s",
                report.total_records,
                if report.total_records == 1 { "" } else { "s" },
                report.emitted,
                report.total_skipped(),
                report.skip_count(SkipReason::ConnectionError),
                report.skip_count(SkipReason::EmptyOutput),
                report.invalid,
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("probe_normalizer error: {:#}", e);
            process::exit(1);
        }
    }
}
