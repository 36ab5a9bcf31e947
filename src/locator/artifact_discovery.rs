use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use walkdir::WalkDir;

use crate::models::{CommandLog, ToolchainLayout};

/// Discover every command log under a build root
///
/// # Arguments
///
/// * `root` - The build output directory
/// * `layout` - Naming conventions used to recognize directories and logs
///
/// # Returns
///
/// Returns a Vec of [`CommandLog`] in discovery order: intermediate directory,
/// then log directory, then file name. A tree without intermediate directories
/// yields an empty Vec (not an error).
///
/// # Errors
///
/// Returns an error if:
/// - `root` does not exist or is not a directory
/// - Any directory in the tree cannot be read
pub fn discover_command_logs(root: &Path, layout: &ToolchainLayout) -> Result<Vec<CommandLog>> {
    if !root.is_dir() {
        bail!("Build directory not found or not a directory: {}", root.display());
    }

    let mut command_logs = Vec::new();

    for intermediate_dir in discover_intermediate_dirs(root, layout)? {
        for log_dir in discover_log_dirs(&intermediate_dir, layout)? {
            for path in collect_command_logs(&log_dir, layout)? {
                command_logs.push(CommandLog {
                    intermediate_dir: intermediate_dir.clone(),
                    log_dir: log_dir.clone(),
                    path,
                });
            }
        }
    }

    Ok(command_logs)
}

/// Find intermediate build directories under `root`
///
/// A matched directory is not descended into; its contents are handled by
/// [`discover_log_dirs`].
pub fn discover_intermediate_dirs(root: &Path, layout: &ToolchainLayout) -> Result<Vec<PathBuf>> {
    let dirs = find_marked_dirs(root, |name| layout.is_intermediate_dir(name))?;
    for dir in &dirs {
        println!("intermediate directory found: {}", dir.display());
    }
    Ok(dirs)
}

/// Find log directories inside an intermediate directory
pub fn discover_log_dirs(intermediate_dir: &Path, layout: &ToolchainLayout) -> Result<Vec<PathBuf>> {
    find_marked_dirs(intermediate_dir, |name| layout.is_log_dir(name))
}

/// List the command logs directly inside a log directory, sorted by file name
pub fn collect_command_logs(log_dir: &Path, layout: &ToolchainLayout) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(log_dir)
        .with_context(|| format!("Failed to read log directory: {}", log_dir.display()))?;

    let mut logs = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if layout.is_command_log(&entry.file_name().to_string_lossy()) {
            logs.push(path);
        }
    }

    logs.sort();
    Ok(logs)
}

/// Walk `root` (itself included) collecting directories whose name matches,
/// without descending into a matched directory
fn find_marked_dirs(root: &Path, is_marked: impl Fn(&str) -> bool) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    let mut walker = WalkDir::new(root).sort_by_file_name().into_iter();

    while let Some(entry) = walker.next() {
        let entry =
            entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;

        if !entry.file_type().is_dir() {
            continue;
        }

        if is_marked(&entry.file_name().to_string_lossy()) {
            found.push(entry.into_path());
            walker.skip_current_dir();
        }
    }

    Ok(found)
}
