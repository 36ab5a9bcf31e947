use serde::{Deserialize, Serialize};

/// A single compilation database entry.
///
/// Field order is the serialized key order: `directory`, `file`, `command`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileRecord {
    /// Directory containing the source file, as written in the log
    pub directory: String,
    /// Source file name without any directory component
    pub file: String,
    /// Full invocation, compiler executable first
    pub command: String,
}

impl CompileRecord {
    /// Build a record from a split source path and the raw argument line.
    ///
    /// The log only stores arguments, so the compiler executable is prepended.
    pub fn new(directory: &str, file: &str, compiler: &str, arguments: &str) -> Self {
        Self {
            directory: directory.to_string(),
            file: file.to_string(),
            command: format!("{} {}", compiler, arguments),
        }
    }
}
