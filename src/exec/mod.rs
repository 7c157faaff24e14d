// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`slot_pool`] bounds how many commands run at the same time.
//! - [`backend`] provides the `ExecutorBackend` trait and the
//!   `RealExecutorBackend` that spawns one OS process per command.
//! - [`task_runner`] wraps one backend call with start/finish notifications.
//! - [`report`] renders those notifications as status lines.

pub mod backend;
pub mod report;
pub mod slot_pool;
pub mod task_runner;

pub use backend::{ExecutorBackend, RealExecutorBackend};
pub use report::{Reporter, StreamReporter};
pub use slot_pool::{Slot, SlotPool};
pub use task_runner::run_command;
