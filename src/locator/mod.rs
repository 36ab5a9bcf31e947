//! Discovery of command logs in an MSBuild output tree
//!
//! The toolchain leaves one intermediate directory (`*.dir`) per target, each
//! holding a tracker log directory (`*.tlog`) with `CL.command.*.tlog` files.
//! Discovery runs in three passes:
//!
//! 1. Walk the build root for intermediate directories, without descending into them
//! 2. Walk each intermediate directory for log directories, without descending into them
//! 3. List command logs directly inside each log directory
//!
//! Directory entries are visited in file name order so repeated runs over an
//! unchanged tree yield the same logs in the same order. Symlinks are not followed.

pub mod artifact_discovery;

pub use artifact_discovery::{
    collect_command_logs, discover_command_logs, discover_intermediate_dirs, discover_log_dirs,
};
