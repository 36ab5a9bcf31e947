//! tlog-compdb - Generate `compile_commands.json` from MSBuild command logs
//!
//! The Visual C++ toolchain records every `cl.exe` invocation in
//! `CL.command.*.tlog` files inside its intermediate build directories. This
//! library turns those logs into a compilation database:
//!
//! - Locating intermediate (`*.dir`) and log (`*.tlog`) directories under a build root
//! - Decoding and parsing the UTF-16, two-lines-per-entry command logs
//! - Writing the collected records as `compile_commands.json`
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use tlog_compdb::{ToolchainLayout, build_database, write_database};
//!
//! let layout = ToolchainLayout::default();
//! let root = Path::new("build");
//! let records = build_database(root, &layout)?;
//! write_database(root, &layout, &records)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod database;
pub mod locator;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use database::{build_database, write_database};
pub use locator::discover_command_logs;
pub use models::{CommandLog, CompileRecord, ToolchainLayout};
pub use parsers::parse_command_log;
pub use utils::{normalize_root, split_source_path};
