use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use runlist::exec::ExecutorBackend;
use runlist::types::{CommandResult, CommandSpec};

/// Shared counters so tests can inspect a backend after the coordinator
/// has taken ownership of it.
#[derive(Debug, Default)]
pub struct FakeStats {
    running: AtomicUsize,
    peak: AtomicUsize,
    started: Mutex<Vec<String>>,
}

impl FakeStats {
    /// Highest number of commands observed executing at the same time.
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    /// Command lines in the order their execution started.
    pub fn started(&self) -> Vec<String> {
        self.started.lock().unwrap().clone()
    }
}

/// A fake executor that never spawns a process.
///
/// The program name picks the outcome:
/// - `pass` exits 0
/// - `fail` exits 1
/// - `missing` is a launch error
///
/// The first argument, if numeric, is a simulated runtime in milliseconds.
pub struct FakeExecutor {
    stats: Arc<FakeStats>,
}

impl FakeExecutor {
    pub fn new(stats: Arc<FakeStats>) -> Self {
        Self { stats }
    }
}

impl ExecutorBackend for FakeExecutor {
    fn execute(
        &self,
        spec: CommandSpec,
    ) -> Pin<Box<dyn Future<Output = CommandResult> + Send + '_>> {
        let stats = Arc::clone(&self.stats);

        Box::pin(async move {
            if spec.program() == "missing" {
                return CommandResult::launch_error(spec, "No such file or directory (os error 2)");
            }

            stats.started.lock().unwrap().push(spec.command_line());
            let now = stats.running.fetch_add(1, Ordering::SeqCst) + 1;
            stats.peak.fetch_max(now, Ordering::SeqCst);

            let ms = spec
                .arguments()
                .first()
                .and_then(|a| a.parse::<u64>().ok())
                .unwrap_or(0);
            let elapsed = Duration::from_millis(ms);
            tokio::time::sleep(elapsed).await;

            stats.running.fetch_sub(1, Ordering::SeqCst);

            let code = if spec.program() == "pass" { 0 } else { 1 };
            let output = format!("{} output\n", spec.program()).into_bytes();
            CommandResult::completed(spec, Some(code), output, elapsed)
        })
    }
}
