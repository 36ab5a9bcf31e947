use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use crate::database::{build_database, database_path, write_database};
use crate::models::ToolchainLayout;
use crate::utils::normalize_root;

#[derive(Parser)]
#[command(name = "tlog-compdb")]
#[command(version = "0.1.0")]
#[command(about = "Generate compile_commands.json from MSBuild compiler command logs", long_about = None)]
pub struct Cli {
    /// Build output directory to scan; the database is written into it
    pub build_dir: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    generate(&cli.build_dir)?;
    Ok(())
}

/// Regenerate the compilation database for `build_dir` from scratch
///
/// Returns the path of the written database.
pub fn generate(build_dir: &Path) -> Result<PathBuf> {
    let layout = ToolchainLayout::default();
    let root = normalize_root(build_dir);
    let output = database_path(&root, &layout);

    println!("generating \"{}\"...", output.display());

    let records = build_database(&root, &layout)?;
    write_database(&root, &layout, &records)?;

    println!("{} generation done", layout.output_file_name);

    Ok(output)
}
