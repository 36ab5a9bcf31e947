use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::locator::discover_command_logs;
use crate::models::{CompileRecord, ToolchainLayout};
use crate::parsers::parse_command_log;

/// Build the compilation database for a build root
///
/// Discovers every command log under `root` and parses them in discovery
/// order, concatenating their records. Records are not deduplicated: a file
/// compiled in several configurations appears once per compilation.
///
/// # Errors
///
/// Returns an error if discovery fails or any command log fails to read,
/// decode or parse. Parse errors carry `failed processing "<log>"` context.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use tlog_compdb::{ToolchainLayout, build_database};
///
/// let records = build_database(Path::new("build"), &ToolchainLayout::default())?;
/// println!("{} compile commands", records.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_database(root: &Path, layout: &ToolchainLayout) -> Result<Vec<CompileRecord>> {
    let command_logs = discover_command_logs(root, layout)?;
    let mut records = Vec::new();

    for command_log in &command_logs {
        println!("processing \"{}\"...", command_log.path.display());
        let parsed = parse_command_log(&command_log.path, layout)
            .with_context(|| format!("failed processing \"{}\"", command_log.path.display()))?;
        records.extend(parsed);
    }

    let log_dirs: HashSet<&Path> = command_logs.iter().map(|l| l.log_dir.as_path()).collect();
    let intermediate_dirs: HashSet<&Path> =
        command_logs.iter().map(|l| l.intermediate_dir.as_path()).collect();
    println!(
        "collected {} compile commands from {} command logs ({} log directories in {} intermediate directories)",
        records.len(),
        command_logs.len(),
        log_dirs.len(),
        intermediate_dirs.len()
    );

    Ok(records)
}
