use std::sync::Mutex;

use runlist::exec::Reporter;
use runlist::types::{CommandOutcome, CommandResult, CommandSpec, RunSummary};

/// One notification as seen by [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Started { line: String, position: usize, total: usize },
    Finished { line: String, outcome: CommandOutcome },
    Summary { passed: usize, failed: usize },
}

/// Reporter that records every notification in arrival order.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<Notification>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Notification> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, n: Notification) {
        self.events.lock().unwrap().push(n);
    }
}

impl Reporter for RecordingReporter {
    fn started(&self, spec: &CommandSpec, position: usize, total: usize) {
        self.push(Notification::Started {
            line: spec.command_line(),
            position,
            total,
        });
    }

    fn finished(&self, result: &CommandResult, _position: usize, _total: usize) {
        self.push(Notification::Finished {
            line: result.spec.command_line(),
            outcome: result.outcome,
        });
    }

    fn summary(&self, summary: &RunSummary) {
        self.push(Notification::Summary {
            passed: summary.passed,
            failed: summary.failed,
        });
    }
}
