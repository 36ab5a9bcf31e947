//! Compilation database assembly and output
//!
//! # Error Handling Strategy
//!
//! Generation is all-or-nothing:
//!
//! - **Discovery errors**: a missing build root or unreadable directory stops the run.
//!
//! - **Parse errors**: the first command log that fails to parse stops the run. The
//!   error names the log file so the user can inspect it.
//!
//! - **Output**: the database is only written once every log has parsed, and is written
//!   through a temp file and rename. A failed run never leaves a partial
//!   `compile_commands.json` behind, and an existing one is left untouched.

pub mod builder;
pub mod writer;

pub use builder::build_database;
pub use writer::{database_path, write_database};
