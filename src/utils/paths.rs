use std::fs::File;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result, bail};

// Maximum size of a single command log: 64MB
const MAX_FILE_SIZE_BYTES: u64 = 64 * 1024 * 1024;

// Command logs always hold Windows paths, whatever the host platform
const SEPARATORS: [char; 2] = ['\\', '/'];

/// Splits a Windows source path into its directory and file name portions
///
/// Both `\` and `/` separate components. A drive prefix stays with the
/// directory, and a root directory keeps its separator.
///
/// # Examples
///
/// ```
/// use tlog_compdb::split_source_path;
///
/// assert_eq!(split_source_path(r"C:\src\foo.c"), (r"C:\src", "foo.c"));
/// assert_eq!(split_source_path(r"C:\foo.c"), (r"C:\", "foo.c"));
/// assert_eq!(split_source_path("foo.c"), ("", "foo.c"));
/// ```
pub fn split_source_path(path: &str) -> (&str, &str) {
    let drive_len = drive_prefix_len(path);
    let rest = &path[drive_len..];

    match rest.rfind(SEPARATORS) {
        Some(idx) => {
            let head = &rest[..=idx];
            let trimmed = head.trim_end_matches(SEPARATORS);
            // A head made only of separators is the root and is kept as-is
            let dir_len = if trimmed.is_empty() { head.len() } else { trimmed.len() };
            (&path[..drive_len + dir_len], &rest[idx + 1..])
        }
        None => (&path[..drive_len], rest),
    }
}

/// Length of a `X:` drive prefix, or 0 if the path has none
fn drive_prefix_len(path: &str) -> usize {
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' { 2 } else { 0 }
}

/// Lexically normalizes the build root given on the command line
///
/// Drops `.` components and trailing separators, and resolves `..` against
/// the preceding component. `..` at the start of a relative path is kept, and
/// `..` directly after the root is dropped. An empty result becomes `.`. The
/// filesystem is not consulted, so symlinks are not resolved.
pub fn normalize_root(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = normalized.components().next_back();
                let pops_normal = matches!(last, Some(Component::Normal(_)));
                let at_root = matches!(last, Some(Component::RootDir | Component::Prefix(_)));
                if pops_normal {
                    normalized.pop();
                } else if !at_root {
                    normalized.push("..");
                }
            }
            other => normalized.push(other),
        }
    }
    if normalized.as_os_str().is_empty() { PathBuf::from(".") } else { normalized }
}

/// Validates that an opened command log is within the size limit
///
/// # Errors
///
/// Returns an error if the metadata cannot be read or the file is larger
/// than [`MAX_FILE_SIZE_BYTES`]
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}
