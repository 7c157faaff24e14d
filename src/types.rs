// src/types.rs

//! Core data types shared by the loader, executor, coordinator and history
//! rewriter.

use std::fmt;
use std::time::Duration;

/// One parsed line of the command-list file: a program plus its arguments.
///
/// Immutable once created by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    arguments: Vec<String>,
}

impl CommandSpec {
    /// Build a spec. `program` must be non-empty; the loader enforces this
    /// and reports a parse error otherwise.
    pub fn new(program: impl Into<String>, arguments: Vec<String>) -> Self {
        Self {
            program: program.into(),
            arguments,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Program and arguments joined by single spaces.
    ///
    /// This is the exact inverse of the loader's split for arguments without
    /// embedded spaces; it is also the line format used by the history
    /// rewriter.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.arguments {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Terminal classification of one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Process ran and exited with status 0.
    Success,
    /// Process ran and exited non-zero (or was killed by a signal).
    Failure,
    /// Process could not be started at all.
    LaunchError,
}

impl CommandOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, CommandOutcome::Success)
    }
}

/// Outcome record for one executed [`CommandSpec`].
///
/// Produced exactly once by the executor backend and read-only afterwards.
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub spec: CommandSpec,
    pub outcome: CommandOutcome,
    /// Merged stdout + stderr in arrival order.
    pub output: Vec<u8>,
    /// Spawn-to-exit wall clock time; zero for `LaunchError`.
    pub elapsed: Duration,
    /// Exit code if the process exited normally.
    pub exit_code: Option<i32>,
    /// Launch error message, set only for `LaunchError`.
    pub error: Option<String>,
}

impl CommandResult {
    pub fn completed(
        spec: CommandSpec,
        exit_code: Option<i32>,
        output: Vec<u8>,
        elapsed: Duration,
    ) -> Self {
        let outcome = if exit_code == Some(0) {
            CommandOutcome::Success
        } else {
            CommandOutcome::Failure
        };
        Self {
            spec,
            outcome,
            output,
            elapsed,
            exit_code,
            error: None,
        }
    }

    pub fn launch_error(spec: CommandSpec, error: impl fmt::Display) -> Self {
        Self {
            spec,
            outcome: CommandOutcome::LaunchError,
            output: Vec::new(),
            elapsed: Duration::ZERO,
            exit_code: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    /// Captured output decoded lossily as UTF-8.
    pub fn output_lossy(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

/// Aggregate counts for a whole run. Derived after all commands joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn from_results(results: &[CommandResult], elapsed: Duration) -> Self {
        let passed = results.iter().filter(|r| r.is_success()).count();
        Self {
            passed,
            failed: results.len() - passed,
            elapsed,
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// The run as a whole fails if any single command failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}
