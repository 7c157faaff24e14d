// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `runlist`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "runlist",
    version,
    about = "Run every command listed in a file, a bounded number at a time.",
    long_about = None
)]
pub struct CliArgs {
    /// Command-list file: one command per line, `#` starts a comment line.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Maximum number of commands running at the same time.
    ///
    /// Default: 20 (or `run.concurrency` from `--config`).
    #[arg(short = 'c', long, visible_alias = "cl", value_name = "N")]
    pub concurrency: Option<usize>,

    /// Also print the captured output of passing commands.
    #[arg(short, long)]
    pub verbose: bool,

    /// After the run, rewrite FILE ordered by elapsed time (slowest first),
    /// keeping the previous version at `FILE.old`.
    #[arg(short = 'w', long = "rewrite")]
    pub rewrite: bool,

    /// Optional TOML file with `[run]` defaults.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `RUNLIST_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse the command list and print it, but don't execute anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_concurrency_unset() {
        let args = CliArgs::try_parse_from(["runlist", "cmds.txt"]).unwrap();
        assert_eq!(args.file, PathBuf::from("cmds.txt"));
        assert_eq!(args.concurrency, None);
        assert!(!args.verbose);
        assert!(!args.rewrite);
        assert!(!args.dry_run);
    }

    #[test]
    fn short_and_alias_flags() {
        let args =
            CliArgs::try_parse_from(["runlist", "-c", "4", "-v", "-w", "cmds.txt"]).unwrap();
        assert_eq!(args.concurrency, Some(4));
        assert!(args.verbose);
        assert!(args.rewrite);

        let args = CliArgs::try_parse_from(["runlist", "--cl", "2", "cmds.txt"]).unwrap();
        assert_eq!(args.concurrency, Some(2));
    }

    #[test]
    fn file_argument_is_required() {
        assert!(CliArgs::try_parse_from(["runlist"]).is_err());
        assert!(CliArgs::try_parse_from(["runlist", "a.txt", "b.txt"]).is_err());
    }
}
