// src/config/loader.rs

use std::path::Path;

use tracing::debug;

use crate::config::model::ConfigFile;
use crate::errors::{Result, RunlistError};
use crate::fs::FileSystem;
use crate::types::CommandSpec;

/// Load the optional `[run]` defaults file.
pub fn load_config_file(fs: &dyn FileSystem, path: &Path) -> Result<ConfigFile> {
    let contents = fs.read_to_string(path)?;
    let config: ConfigFile = toml::from_str(&contents)?;
    Ok(config)
}

/// Read a command-list file and parse every runnable line.
pub fn load_command_list(fs: &dyn FileSystem, path: &Path) -> Result<Vec<CommandSpec>> {
    let contents = fs.read_to_string(path)?;
    let specs = parse_command_list(&contents)?;
    debug!(path = ?path, commands = specs.len(), "command list loaded");
    Ok(specs)
}

/// Parse the text of a command list.
///
/// Empty lines and lines starting with `#` are skipped. Line numbers in
/// errors are 1-based and count skipped lines too.
pub fn parse_command_list(text: &str) -> Result<Vec<CommandSpec>> {
    let mut specs = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let spec = parse_command_line(line).map_err(|message| RunlistError::ParseError {
            line: idx + 1,
            message,
        })?;
        specs.push(spec);
    }
    Ok(specs)
}

/// Split one line on every single space: the first token is the program,
/// the rest are arguments.
///
/// No quoting or escaping. Consecutive spaces produce empty arguments.
pub fn parse_command_line(line: &str) -> std::result::Result<CommandSpec, String> {
    let mut tokens = line.split(' ').map(str::to_string);
    let program = tokens.next().unwrap_or_default();
    if program.is_empty() {
        return Err(format!("missing program name in {line:?}"));
    }
    Ok(CommandSpec::new(program, tokens.collect()))
}
