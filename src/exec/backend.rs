// src/exec/backend.rs

//! Pluggable executor backend abstraction.
//!
//! The coordinator talks to an `ExecutorBackend` instead of spawning
//! processes itself, so tests can swap in a fake that returns scripted
//! results without touching the OS.
//!
//! `RealExecutorBackend` is the production implementation: one child process
//! per command, stdout and stderr merged into one buffer.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::{debug, error, warn};

use crate::types::{CommandResult, CommandSpec};

/// Trait abstracting how a single command is run to completion.
///
/// Implementations must always produce a result; launch problems are
/// reported as `CommandOutcome::LaunchError`, never as a panic.
pub trait ExecutorBackend: Send + Sync {
    fn execute(
        &self,
        spec: CommandSpec,
    ) -> Pin<Box<dyn Future<Output = CommandResult> + Send + '_>>;
}

/// Real executor backend used in production.
#[derive(Debug, Clone, Default)]
pub struct RealExecutorBackend;

impl RealExecutorBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ExecutorBackend for RealExecutorBackend {
    fn execute(
        &self,
        spec: CommandSpec,
    ) -> Pin<Box<dyn Future<Output = CommandResult> + Send + '_>> {
        Box::pin(run_process(spec))
    }
}

/// Spawn `spec.program` directly (no shell), wait for it and classify the
/// exit status. No timeout: a hung child blocks here indefinitely.
async fn run_process(spec: CommandSpec) -> CommandResult {
    let mut cmd = Command::new(spec.program());
    cmd.args(spec.arguments())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let start = Instant::now();
    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(err) => {
            debug!(program = %spec.program(), error = %err, "failed to start process");
            return CommandResult::launch_error(spec, err);
        }
    };

    let output = Mutex::new(Vec::new());
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let (status, out_res, err_res) = tokio::join!(
        child.wait(),
        drain_into(stdout, &output),
        drain_into(stderr, &output),
    );
    let elapsed = start.elapsed();

    for res in [out_res, err_res] {
        if let Err(err) = res {
            warn!(program = %spec.program(), error = %err, "reading process output failed");
        }
    }

    let output = output.into_inner().unwrap_or_else(PoisonError::into_inner);

    let exit_code = match status {
        Ok(status) => status.code(),
        Err(err) => {
            error!(program = %spec.program(), error = %err, "waiting for process failed");
            None
        }
    };

    debug!(
        program = %spec.program(),
        exit_code = ?exit_code,
        elapsed_ms = elapsed.as_millis() as u64,
        output_bytes = output.len(),
        "process exited"
    );

    CommandResult::completed(spec, exit_code, output, elapsed)
}

/// Copy everything from `pipe` into the shared buffer, chunk by chunk, so
/// stdout and stderr interleave in the order the reads complete.
async fn drain_into<R>(pipe: Option<R>, buffer: &Mutex<Vec<u8>>) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
{
    let Some(mut pipe) = pipe else {
        return Ok(());
    };

    let mut chunk = [0u8; 8192];
    loop {
        let n = pipe.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(&chunk[..n]);
    }
}
