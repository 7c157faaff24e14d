// src/engine/mod.rs

//! Run orchestration for runlist.
//!
//! The [`coordinator`] admits commands through the slot pool in input order,
//! runs each one on its own task, joins them all, and aggregates the
//! pass/fail summary once every task has finished.

pub mod coordinator;

pub use coordinator::{Coordinator, RunReport};
