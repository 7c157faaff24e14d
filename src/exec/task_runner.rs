// src/exec/task_runner.rs

//! Lifecycle of one command inside a run.

use tracing::info;

use crate::exec::backend::ExecutorBackend;
use crate::exec::report::Reporter;
use crate::types::{CommandResult, CommandSpec};

/// Announce, execute and report a single command.
///
/// The START notification is emitted before the backend blocks on the
/// process; the completion notification after it has exited. Neither affects
/// how the result is classified.
pub async fn run_command<E>(
    backend: &E,
    reporter: &dyn Reporter,
    spec: CommandSpec,
    position: usize,
    total: usize,
) -> CommandResult
where
    E: ExecutorBackend + ?Sized,
{
    reporter.started(&spec, position, total);
    info!(position, total, program = %spec.program(), "starting command");

    let result = backend.execute(spec).await;

    info!(
        position,
        program = %result.spec.program(),
        outcome = ?result.outcome,
        exit_code = ?result.exit_code,
        elapsed_ms = result.elapsed.as_millis() as u64,
        "command finished"
    );
    reporter.finished(&result, position, total);

    result
}
