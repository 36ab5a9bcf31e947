pub mod commands;

pub use commands::{Cli, generate, run};
