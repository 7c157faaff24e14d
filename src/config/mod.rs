// src/config/mod.rs

//! Configuration and command-list loading for runlist.
//!
//! Responsibilities:
//! - Define the immutable run settings and the TOML defaults file (`model.rs`).
//! - Load the command list and the defaults file from disk (`loader.rs`).
//! - Validate settings such as the concurrency level (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_command_list, load_config_file, parse_command_line, parse_command_list};
pub use model::{ConfigFile, DEFAULT_CONCURRENCY, RunConfig, RunSection};
