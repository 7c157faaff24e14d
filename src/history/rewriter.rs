// src/history/rewriter.rs

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::{Result, RunlistError};
use crate::fs::FileSystem;
use crate::types::CommandResult;

/// `<path>.old`, the single-generation backup location.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".old");
    PathBuf::from(name)
}

/// Results ordered slowest first.
///
/// The sort is stable, so equal elapsed times keep their input order.
/// Launch errors have zero elapsed time and end up last.
pub fn order_by_elapsed(results: &[CommandResult]) -> Vec<&CommandResult> {
    let mut ordered: Vec<&CommandResult> = results.iter().collect();
    ordered.sort_by(|a, b| b.elapsed.cmp(&a.elapsed));
    ordered
}

/// New file contents: one `program arg1 arg2 ...` line per command.
///
/// Comments and blank lines from the original file are not preserved.
pub fn render_history(results: &[CommandResult]) -> String {
    let mut out = String::new();
    for result in order_by_elapsed(results) {
        out.push_str(&result.spec.command_line());
        out.push('\n');
    }
    out
}

/// Replace `path` with the commands reordered by elapsed time, keeping the
/// previous version at `path.old`.
///
/// 1. Remove any stale backup (failure ignored).
/// 2. Rename `path` to the backup. On failure nothing else is touched.
/// 3. Write the new contents to `path`.
pub fn rewrite_by_elapsed(
    fs: &dyn FileSystem,
    path: &Path,
    results: &[CommandResult],
) -> Result<()> {
    let backup = backup_path(path);
    let contents = render_history(results);

    if fs.exists(&backup) {
        if let Err(err) = fs.remove_file(&backup) {
            debug!(backup = ?backup, error = %err, "could not remove stale backup; continuing");
        }
    }

    fs.rename(path, &backup).map_err(|err| {
        RunlistError::Rewrite(format!(
            "failed to rename {} to {}: {err:#}",
            path.display(),
            backup.display()
        ))
    })?;

    fs.write(path, contents.as_bytes()).map_err(|err| {
        RunlistError::Rewrite(format!(
            "failed to create {} (previous version kept at {}): {err:#}",
            path.display(),
            backup.display()
        ))
    })?;

    info!(path = ?path, commands = results.len(), "command list rewritten by elapsed time");
    Ok(())
}
