// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod history;
pub mod logging;
pub mod types;

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::cli::CliArgs;
use crate::config::{RunConfig, load_command_list, load_config_file};
use crate::engine::Coordinator;
use crate::errors::Result;
use crate::exec::{RealExecutorBackend, Reporter, StreamReporter};
use crate::fs::RealFileSystem;
use crate::history::rewrite_by_elapsed;
use crate::types::{CommandSpec, RunSummary};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - settings (CLI + optional `--config` file)
/// - command-list loading
/// - the coordinator with the real process backend
/// - the optional history rewrite
///
/// Returns the run summary; the caller maps it to an exit status. Errors are
/// only returned for configuration/input problems, before anything runs.
pub async fn run(args: CliArgs) -> Result<RunSummary> {
    let fs = RealFileSystem;
    let file_config = match &args.config {
        Some(path) => Some(load_config_file(&fs, path)?),
        None => None,
    };
    let config = RunConfig::from_sources(
        file_config.as_ref(),
        args.concurrency,
        args.verbose,
        args.rewrite,
    )?;
    debug!(?config, "run configuration");

    let specs = load_command_list(&fs, &args.file)?;

    if args.dry_run {
        print_dry_run(&config, &specs);
        return Ok(RunSummary::default());
    }

    let reporter = Arc::new(StreamReporter::stdout(config.verbose()));
    let coordinator = Coordinator::new(config, RealExecutorBackend::new(), reporter.clone());
    let report = coordinator.run(specs).await?;
    reporter.summary(&report.summary);

    if config.rewrite_by_elapsed() {
        // A failed rewrite is reported but never changes the run's status.
        match rewrite_by_elapsed(&fs, &args.file, &report.results) {
            Ok(()) => info!(file = ?args.file, "command list reordered"),
            Err(err) => {
                error!(error = %err, "history rewrite abandoned");
                eprintln!("runlist: {err}");
            }
        }
    }

    Ok(report.summary)
}

/// Simple dry-run output: settings plus the parsed commands.
fn print_dry_run(config: &RunConfig, specs: &[CommandSpec]) {
    println!("runlist dry-run");
    println!("  concurrency = {}", config.concurrency());
    println!("  verbose = {}", config.verbose());
    println!("  rewrite_by_elapsed = {}", config.rewrite_by_elapsed());
    println!();

    println!("commands ({}):", specs.len());
    for (i, spec) in specs.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, spec);
    }

    debug!("dry-run complete (no execution)");
}
