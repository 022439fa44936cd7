//! CLI tool for migrating FreeCAD Path job files.

mod candidates;
mod commands;
mod exit_codes;

use clap::Parser;
use std::path::{Path, PathBuf};

use commands::RunConfig;

/// Migrates pre-0.21 FreeCAD Path jobs to the 0.21 code structure
#[derive(Parser)]
#[command(name = "jobfix")]
#[command(version, about = "Migrates pre-0.21 FreeCAD Path jobs to the 0.21 code structure", long_about = None)]
pub struct Cli {
    /// Input FreeCAD project file
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file; defaults to the input name with the suffix inserted
    #[arg(short = 'o', long = "output", value_name = "FILE", requires = "input")]
    output: Option<PathBuf>,

    /// Directory containing FCStd files; the current directory when no
    /// input file is given either
    #[arg(
        short = 'd',
        long = "directory",
        value_name = "DIRECTORY",
        conflicts_with_all = ["input", "output"]
    )]
    directory: Option<PathBuf>,

    /// Suffix inserted before the extension of derived output names
    /// ([a-zA-Z0-9_], 1-25 characters)
    #[arg(
        short = 's',
        long,
        default_value = "_current",
        value_name = "SUFFIX",
        value_parser = candidates::parse_suffix
    )]
    suffix: String,

    /// Overwrite existing output files
    #[arg(short = 'f', long)]
    force: bool,

    /// Suppress per-file progress output
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = RunConfig {
        suffix: cli.suffix,
        overwrite: cli.force,
        quiet: cli.quiet,
    };

    let exit_code = if let Some(directory) = &cli.directory {
        commands::convert_directory(directory, &config)
    } else if let Some(input) = &cli.input {
        commands::convert_single(input, cli.output.as_deref(), &config)
    } else {
        commands::convert_directory(Path::new("."), &config)
    };

    std::process::exit(exit_code.code());
}
