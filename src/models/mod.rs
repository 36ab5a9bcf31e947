//! Data models for compilation database generation.
//!
//! - [`CompileRecord`] - One entry of `compile_commands.json`
//! - [`CommandLog`] - A located `CL.command.*.tlog` file
//! - [`ToolchainLayout`] - Naming conventions of the MSBuild output tree
//!
//! Records serialize with serde in the exact key order consumers expect.

pub mod command_log;
pub mod record;
pub mod toolchain;

pub use command_log::CommandLog;
pub use record::CompileRecord;
pub use toolchain::ToolchainLayout;
