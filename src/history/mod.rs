// src/history/mod.rs

//! Post-run reordering of the command-list file by elapsed time.
//!
//! Putting the slowest commands first means they are admitted first on the
//! next run, which shortens the tail when the slot pool is saturated.

pub mod rewriter;

pub use rewriter::{backup_path, order_by_elapsed, render_history, rewrite_by_elapsed};
