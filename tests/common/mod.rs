//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Encode text the way the MSBuild file tracker writes it: UTF-16LE with a BOM
pub fn utf16_le_with_bom(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFE];
    bytes.extend(text.encode_utf16().flat_map(|u| u.to_le_bytes()));
    bytes
}

/// Builder for creating test MSBuild output trees
pub struct BuildDirBuilder {
    temp_dir: TempDir,
}

impl BuildDirBuilder {
    /// Create a new builder with an empty build directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the build directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a command log at `log_dir` (relative to the build root)
    pub fn with_log(self, log_dir: &str, log: CommandLogBuilder) -> Self {
        let dir = self.temp_dir.path().join(log_dir);
        fs::create_dir_all(&dir).expect("Failed to create log dir");
        log.create_in(&dir);
        self
    }

    /// Add an arbitrary file with raw bytes (relative to the build root)
    pub fn with_file(self, relative: &str, bytes: &[u8]) -> Self {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(path, bytes).expect("Failed to write file");
        self
    }

    /// Add an empty directory (relative to the build root)
    pub fn with_dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.temp_dir.path().join(relative)).expect("Failed to create dir");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for BuildDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `CL.command.*.tlog` files
pub struct CommandLogBuilder {
    filename: String,
    entries: Vec<(String, String)>,
    trailing: String,
}

impl CommandLogBuilder {
    /// Create a new command log with the given filename
    pub fn new(filename: &str) -> Self {
        Self { filename: filename.to_string(), entries: Vec::new(), trailing: String::new() }
    }

    /// Add a source path / argument line pair
    pub fn with_entry(mut self, source: &str, arguments: &str) -> Self {
        self.entries.push((source.to_string(), arguments.to_string()));
        self
    }

    /// Append raw text after the entries (used to build malformed logs)
    pub fn with_trailing(mut self, text: &str) -> Self {
        self.trailing.push_str(text);
        self
    }

    /// Render the log text, CRLF terminated like the tracker writes it
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for (source, arguments) in &self.entries {
            text.push_str(&format!("^{}\r\n{}\r\n", source, arguments));
        }
        text.push_str(&self.trailing);
        text
    }

    /// Create the file in the given directory
    pub fn create_in(&self, dir: &Path) -> PathBuf {
        let path = dir.join(&self.filename);
        fs::write(&path, utf16_le_with_bom(&self.to_text())).expect("Failed to write command log");
        path
    }
}

/// Helper to create a realistic build tree with two targets and two configurations
pub fn realistic_build_dir() -> TempDir {
    BuildDirBuilder::new()
        .with_log(
            "app.dir/Debug/app.tlog",
            CommandLogBuilder::new("CL.command.1.tlog")
                .with_entry(r"C:\PROJ\SRC\MAIN.CPP", "/c /Zi /Od /DDEBUG MAIN.CPP")
                .with_entry(r"C:\PROJ\SRC\UTIL.CPP", "/c /Zi /Od /DDEBUG UTIL.CPP"),
        )
        .with_log(
            "app.dir/Release/app.tlog",
            CommandLogBuilder::new("CL.command.1.tlog")
                .with_entry(r"C:\PROJ\SRC\MAIN.CPP", "/c /O2 /DNDEBUG MAIN.CPP"),
        )
        .with_log(
            "lib/core.dir/Debug/core.tlog",
            CommandLogBuilder::new("CL.command.1.tlog")
                .with_entry(r"C:\PROJ\LIB\CORE.C", "/c /Zi CORE.C"),
        )
        .with_file("app.dir/Debug/app.tlog/CL.read.1.tlog", &utf16_le_with_bom("^C:\\X\r\n"))
        .with_dir("bin/Debug")
        .build()
}
