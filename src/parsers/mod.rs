//! Parsers for MSBuild compiler command logs
//!
//! # Error Handling Strategy
//!
//! Unlike a best-effort scan, a compilation database with silently missing or
//! shifted entries is worse than none, so parsing is **fail-fast**:
//!
//! - **Decoding**: the log must be valid UTF-16. Odd byte counts and unpaired
//!   surrogates are errors.
//!
//! - **Pairing**: entries are a source path line followed by a command line.
//!   A path line without a command line, or a blank line where a path is
//!   expected, aborts parsing with the offending line number.
//!
//! - **Propagation**: errors are `anyhow::Result` with context naming the file;
//!   the caller stops at the first failing log and writes nothing.

pub mod command_log;
pub mod encoding;

pub use command_log::{parse_command_log, parse_command_log_str};
pub use encoding::decode_utf16;
