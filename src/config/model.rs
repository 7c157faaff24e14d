// src/config/model.rs

use serde::Deserialize;

/// Concurrency level used when neither the CLI nor a config file sets one.
pub const DEFAULT_CONCURRENCY: usize = 20;

/// Optional defaults file as read from TOML.
///
/// ```toml
/// [run]
/// concurrency = 8
/// verbose = false
/// rewrite_by_elapsed = true
/// ```
///
/// Every key is optional; CLI flags take precedence.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub run: RunSection,
}

/// `[run]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunSection {
    pub concurrency: Option<usize>,
    pub verbose: Option<bool>,
    pub rewrite_by_elapsed: Option<bool>,
}

/// Immutable settings for one run, handed to the coordinator at construction.
///
/// Build it with [`RunConfig::new`] or [`RunConfig::from_sources`]; both go
/// through validation so `concurrency` is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    concurrency: usize,
    verbose: bool,
    rewrite_by_elapsed: bool,
}

impl RunConfig {
    pub(crate) fn new_unchecked(concurrency: usize, verbose: bool, rewrite_by_elapsed: bool) -> Self {
        Self {
            concurrency,
            verbose,
            rewrite_by_elapsed,
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn rewrite_by_elapsed(&self) -> bool {
        self.rewrite_by_elapsed
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_CONCURRENCY, false, false)
    }
}
