//! Candidate discovery and output-name derivation.
//!
//! Directory mode enumerates one directory (non-recursive) for `.FCStd` or
//! `.fcstd` files that do not already carry a migration suffix. Output names
//! are derived by inserting the suffix before the extension:
//! `square.FCStd` with suffix `_fixed` becomes `square_fixed.FCStd`.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Validates a suffix argument: 1-25 characters of `[A-Za-z0-9_]`.
pub fn parse_suffix(raw: &str) -> Result<String, String> {
    if raw.is_empty() {
        return Err("the suffix is empty".to_string());
    }
    if raw.len() > 25 {
        return Err("the suffix length is greater than 25 characters".to_string());
    }
    if !raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err("the suffix contains illegal characters, only [a-zA-Z0-9_] permitted".into());
    }
    Ok(raw.to_string())
}

/// Derives the output path for `input` by inserting `suffix` before the
/// extension. A name without an extension gets the suffix appended.
pub fn with_suffix(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let new_name = match input.extension() {
        Some(ext) => format!("{stem}{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}{suffix}"),
    };
    input.with_file_name(new_name)
}

/// Returns whether `name` is a migration candidate: an FCStd file that does
/// not already end in the configured suffix (or the default `_current`)
/// before its extension.
pub fn is_candidate(name: &str, suffix: &str) -> bool {
    let Some(stem) = name
        .strip_suffix(".FCStd")
        .or_else(|| name.strip_suffix(".fcstd"))
    else {
        return false;
    };
    !stem.ends_with(suffix) && !stem.ends_with("_current")
}

/// Collects candidate files directly inside `directory`, sorted by name for
/// deterministic processing order.
pub fn collect(directory: &Path, suffix: &str) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
        let entry = entry.map_err(io::Error::other)?;
        if !entry.file_type().is_file() {
            continue;
        }
        if is_candidate(&entry.file_name().to_string_lossy(), suffix) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}
