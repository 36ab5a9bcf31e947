use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use crate::models::{CompileRecord, ToolchainLayout};

/// Location of the compilation database for a build root
pub fn database_path(root: &Path, layout: &ToolchainLayout) -> PathBuf {
    root.join(&layout.output_file_name)
}

/// Write the compilation database into the build root
///
/// The records are serialized as a JSON array indented by two spaces, with
/// the keys of each object in `directory`, `file`, `command` order. Any
/// existing database is replaced atomically: the JSON goes to a uniquely
/// named temp file in `root` which is renamed over the database. The temp
/// file is removed if writing or renaming fails.
///
/// Returns the path written.
pub fn write_database(
    root: &Path,
    layout: &ToolchainLayout,
    records: &[CompileRecord],
) -> Result<PathBuf> {
    let path = database_path(root, layout);

    println!("writing \"{}\"...", path.display());

    let json =
        serde_json::to_string_pretty(records).context("Failed to serialize compilation database")?;

    let mut temp_file = NamedTempFile::new_in(root)
        .with_context(|| format!("Failed to create temp file in: {}", root.display()))?;
    temp_file
        .write_all(json.as_bytes())
        .with_context(|| format!("Failed to write temp file: {}", temp_file.path().display()))?;
    temp_file
        .persist(&path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace compilation database: {}", path.display()))?;

    Ok(path)
}
