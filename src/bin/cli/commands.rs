//! Command implementations for the CLI.

use std::path::Path;

use jobfix::{ConvertOptions, ConvertReport, Error, convert};

use crate::candidates;
use crate::exit_codes::{ExitCode, error_to_exit_code};

/// Configuration threaded through a run, explicit rather than global.
pub struct RunConfig {
    pub suffix: String,
    pub overwrite: bool,
    pub quiet: bool,
}

impl RunConfig {
    fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            overwrite: self.overwrite,
        }
    }
}

/// Converts a single file; derives the output name when none was given.
pub fn convert_single(input: &Path, output: Option<&Path>, config: &RunConfig) -> ExitCode {
    let dest = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| candidates::with_suffix(input, &config.suffix));
    convert_one(input, &dest, config)
}

/// Converts every candidate file directly inside `directory`, isolating
/// failures per file and exiting with the worst code seen.
pub fn convert_directory(directory: &Path, config: &RunConfig) -> ExitCode {
    let files = match candidates::collect(directory, &config.suffix) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("error: cannot read directory '{}': {e}", directory.display());
            return ExitCode::IoError;
        }
    };

    if files.is_empty() {
        if !config.quiet {
            println!("No FCStd files to migrate in '{}'", directory.display());
        }
        return ExitCode::Success;
    }

    let mut worst = ExitCode::Success;
    for file in files {
        let dest = candidates::with_suffix(&file, &config.suffix);
        if !config.overwrite && dest.exists() {
            if !config.quiet {
                println!("Skipping {}. Already migrated.", file.display());
            }
            continue;
        }
        worst = worst.worst(convert_one(&file, &dest, config));
    }
    worst
}

fn convert_one(source: &Path, dest: &Path, config: &RunConfig) -> ExitCode {
    if !config.quiet {
        println!("Input file: {}", source.display());
        println!("    Output: {}", dest.display());
    }

    match convert(source, dest, &config.convert_options()) {
        Ok(report) => {
            print_report(source, &report, config);
            if report.has_warnings() {
                ExitCode::Warning
            } else {
                ExitCode::Success
            }
        }
        Err(e @ Error::DestinationExists(_)) => {
            eprintln!("    {e}");
            eprintln!("    Consider the '--force' flag to overwrite existing files.");
            error_to_exit_code(&e)
        }
        Err(e) => {
            eprintln!("    ERROR: {e}");
            error_to_exit_code(&e)
        }
    }
}

fn print_report(source: &Path, report: &ConvertReport, config: &RunConfig) {
    for warning in &report.warnings {
        eprintln!("    warning: {warning}");
    }
    if !config.quiet {
        println!(
            "    {} modules renamed, {} entries patched, {} copied",
            report.modules_renamed, report.entries_patched, report.entries_copied
        );
    }
    if report.entries_patched == 0 {
        log::debug!(
            "{}: no payload entries found, archive copied as-is",
            source.display()
        );
    }
}
