// src/config/validate.rs

use crate::config::model::{ConfigFile, DEFAULT_CONCURRENCY, RunConfig};
use crate::errors::{Result, RunlistError};

impl RunConfig {
    /// Validated constructor.
    pub fn new(concurrency: usize, verbose: bool, rewrite_by_elapsed: bool) -> Result<Self> {
        validate_concurrency(concurrency)?;
        Ok(Self::new_unchecked(concurrency, verbose, rewrite_by_elapsed))
    }

    /// Merge CLI values over an optional config file over built-in defaults.
    ///
    /// Boolean CLI flags can only switch a setting on; a `true` in the config
    /// file cannot be turned off from the command line.
    pub fn from_sources(
        file: Option<&ConfigFile>,
        cli_concurrency: Option<usize>,
        cli_verbose: bool,
        cli_rewrite: bool,
    ) -> Result<Self> {
        let run = file.map(|f| f.run.clone()).unwrap_or_default();

        let concurrency = cli_concurrency
            .or(run.concurrency)
            .unwrap_or(DEFAULT_CONCURRENCY);
        let verbose = cli_verbose || run.verbose.unwrap_or(false);
        let rewrite = cli_rewrite || run.rewrite_by_elapsed.unwrap_or(false);

        Self::new(concurrency, verbose, rewrite)
    }
}

fn validate_concurrency(concurrency: usize) -> Result<()> {
    if concurrency == 0 {
        return Err(RunlistError::ConfigError(
            "concurrency must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}
