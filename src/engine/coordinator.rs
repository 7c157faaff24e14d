// src/engine/coordinator.rs

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::config::RunConfig;
use crate::errors::{Result, RunlistError};
use crate::exec::{ExecutorBackend, Reporter, SlotPool, run_command};
use crate::types::{CommandResult, CommandSpec, RunSummary};

/// Results of a whole run, aligned by index with the input command list.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub results: Vec<CommandResult>,
    pub summary: RunSummary,
}

/// Fans out one task per command under a [`SlotPool`] and joins them all.
///
/// Commands are admitted in input order; when they start and finish relative
/// to each other is up to the OS. Only `RunReport::results` is ordered.
pub struct Coordinator<E: ExecutorBackend> {
    config: RunConfig,
    backend: Arc<E>,
    reporter: Arc<dyn Reporter>,
}

impl<E: ExecutorBackend> fmt::Debug for Coordinator<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coordinator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<E: ExecutorBackend + 'static> Coordinator<E> {
    pub fn new(config: RunConfig, backend: E, reporter: Arc<dyn Reporter>) -> Self {
        Self {
            config,
            backend: Arc::new(backend),
            reporter,
        }
    }

    /// Run every command to completion.
    ///
    /// A failing or unlaunchable command never stops the others. The only
    /// error returned is an internal one (a command task panicking); in that
    /// case the remaining tasks are aborted when the join set is dropped.
    pub async fn run(&self, specs: Vec<CommandSpec>) -> Result<RunReport> {
        let start = Instant::now();
        let pool = SlotPool::new(self.config.concurrency())?;
        let total = specs.len();

        info!(total, concurrency = pool.capacity(), "run started");

        let mut tasks = JoinSet::new();
        for (index, spec) in specs.into_iter().enumerate() {
            let slot = pool.acquire().await?;
            debug!(index, available = pool.available(), "slot acquired");

            let backend = Arc::clone(&self.backend);
            let reporter = Arc::clone(&self.reporter);
            tasks.spawn(async move {
                let result =
                    run_command(backend.as_ref(), reporter.as_ref(), spec, index + 1, total).await;
                slot.release();
                (index, result)
            });
        }

        let mut slots: Vec<Option<CommandResult>> = (0..total).map(|_| None).collect();
        while let Some(joined) = tasks.join_next().await {
            let (index, result) = joined.map_err(|e| {
                RunlistError::Other(anyhow::anyhow!("command task did not complete: {e}"))
            })?;
            slots[index] = Some(result);
        }

        let results: Vec<CommandResult> = slots.into_iter().flatten().collect();
        let summary = RunSummary::from_results(&results, start.elapsed());

        info!(
            passed = summary.passed,
            failed = summary.failed,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "run finished"
        );

        Ok(RunReport { results, summary })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use crate::types::CommandOutcome;

    struct Silent;

    impl Reporter for Silent {
        fn started(&self, _: &CommandSpec, _: usize, _: usize) {}
        fn finished(&self, _: &CommandResult, _: usize, _: usize) {}
        fn summary(&self, _: &RunSummary) {}
    }

    /// Sleeps `arg[0]` milliseconds; program name decides the outcome.
    #[derive(Default)]
    struct Sleeper {
        running: AtomicUsize,
        peak: AtomicUsize,
    }

    impl ExecutorBackend for Sleeper {
        fn execute(
            &self,
            spec: CommandSpec,
        ) -> Pin<Box<dyn Future<Output = CommandResult> + Send + '_>> {
            Box::pin(async move {
                let now = self.running.fetch_add(1, Ordering::SeqCst) + 1;
                self.peak.fetch_max(now, Ordering::SeqCst);
                let ms: u64 = spec.arguments()[0].parse().unwrap();
                tokio::time::sleep(Duration::from_millis(ms)).await;
                self.running.fetch_sub(1, Ordering::SeqCst);
                let code = if spec.program() == "ok" { 0 } else { 1 };
                CommandResult::completed(spec, Some(code), vec![], Duration::from_millis(ms))
            })
        }
    }

    fn spec(line: &str) -> CommandSpec {
        crate::config::parse_command_line(line).unwrap()
    }

    #[tokio::test]
    async fn results_follow_input_order_not_completion_order() {
        let cfg = RunConfig::new(3, false, false).unwrap();
        let coordinator = Coordinator::new(cfg, Sleeper::default(), Arc::new(Silent));
        let specs = vec![spec("ok 60"), spec("bad 5"), spec("ok 20")];

        let report = coordinator.run(specs.clone()).await.unwrap();

        let got: Vec<_> = report.results.iter().map(|r| r.spec.clone()).collect();
        assert_eq!(got, specs);
        assert_eq!(report.results[1].outcome, CommandOutcome::Failure);
        assert_eq!(report.summary.passed, 2);
        assert_eq!(report.summary.failed, 1);
    }

    #[tokio::test]
    async fn never_exceeds_capacity() {
        let cfg = RunConfig::new(2, false, false).unwrap();
        let coordinator = Coordinator::new(cfg, Sleeper::default(), Arc::new(Silent));
        let specs = (0..8).map(|_| spec("ok 10")).collect();

        let report = coordinator.run(specs).await.unwrap();

        assert_eq!(report.summary.total(), 8);
        assert!(coordinator.backend.peak.load(Ordering::SeqCst) <= 2);
    }

    #[tokio::test]
    async fn empty_list_is_a_clean_run() {
        let coordinator =
            Coordinator::new(RunConfig::default(), Sleeper::default(), Arc::new(Silent));
        let report = coordinator.run(Vec::new()).await.unwrap();
        assert!(report.results.is_empty());
        assert!(report.summary.is_success());
    }
}
