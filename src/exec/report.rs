// src/exec/report.rs

//! Human-readable START / PASS / FAIL status lines.
//!
//! Each notification is rendered into one `String` first and then written
//! under a lock in a single `write_all`, so lines from concurrent commands
//! never interleave mid-notification.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tracing::warn;

use crate::types::{CommandOutcome, CommandResult, CommandSpec, RunSummary};

/// Receiver of per-command lifecycle notifications.
///
/// `position` is 1-based, `total` is the number of commands in the run.
pub trait Reporter: Send + Sync {
    fn started(&self, spec: &CommandSpec, position: usize, total: usize);
    fn finished(&self, result: &CommandResult, position: usize, total: usize);
    fn summary(&self, summary: &RunSummary);
}

/// Reporter writing status lines to a stream (stdout in production).
pub struct StreamReporter {
    out: Mutex<Box<dyn Write + Send>>,
    verbose: bool,
}

impl StreamReporter {
    pub fn new(out: Box<dyn Write + Send>, verbose: bool) -> Self {
        Self {
            out: Mutex::new(out),
            verbose,
        }
    }

    pub fn stdout(verbose: bool) -> Self {
        Self::new(Box::new(io::stdout()), verbose)
    }

    fn emit(&self, text: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            warn!(error = %err, "failed to write status line");
        }
    }
}

impl Reporter for StreamReporter {
    fn started(&self, spec: &CommandSpec, position: usize, total: usize) {
        self.emit(&render_start(spec, position, total));
    }

    fn finished(&self, result: &CommandResult, _position: usize, _total: usize) {
        self.emit(&render_finish(result, self.verbose));
    }

    fn summary(&self, summary: &RunSummary) {
        self.emit(&render_summary(summary));
    }
}

pub fn render_start(spec: &CommandSpec, position: usize, total: usize) -> String {
    format!("START: {} ({}/{})\n", spec, position, total)
}

/// Passing commands show output only when `verbose`; failures always do.
pub fn render_finish(result: &CommandResult, verbose: bool) -> String {
    let line = result.spec.command_line();
    match result.outcome {
        CommandOutcome::Success => {
            let mut text = format!("PASS : {} ({})\n", line, format_elapsed(result.elapsed));
            if verbose {
                text.push_str(&result.output_lossy());
                text.push_str("\n\n");
            }
            text
        }
        CommandOutcome::Failure => format!(
            "FAIL : {line}\n{}\n=====: {line} ({})\n",
            result.output_lossy(),
            format_elapsed(result.elapsed)
        ),
        CommandOutcome::LaunchError => format!(
            "FAIL : {line}\n{}\n=====: {line} (not started)\n",
            result.error.as_deref().unwrap_or("failed to start")
        ),
    }
}

pub fn render_summary(summary: &RunSummary) -> String {
    format!(
        "Result: {} passed, {} failed, {} total\nElapsed time: {}\n",
        summary.passed,
        summary.failed,
        summary.total(),
        format_elapsed(summary.elapsed)
    )
}

/// Millisecond-rounded duration, e.g. `1.234s`.
pub fn format_elapsed(d: Duration) -> String {
    format!("{:.3}s", d.as_secs_f64())
}
