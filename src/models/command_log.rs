use std::path::PathBuf;

/// A command log file found under an intermediate build directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLog {
    pub intermediate_dir: PathBuf,
    pub log_dir: PathBuf,
    pub path: PathBuf,
}
