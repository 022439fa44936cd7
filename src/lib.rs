//! # jobfix
//!
//! Migrates pre-0.21 FreeCAD Path job files (`.FCStd`) to the 0.21 code
//! structure.
//!
//! A `.FCStd` file is a zip archive. Two of its entries, `Document.xml` and
//! `GuiDocument.xml`, serialize object proxies by dotted Python module path
//! (for example `PathScripts.PathDrilling`). FreeCAD 0.21 moved those modules
//! under the `Path.*` namespace, so older job files no longer load their
//! operations. This crate rewrites the proxy references: every `Python` node
//! under a `Proxy` property gets its `module` attribute translated through a
//! static rename table, and the node's Base64-encoded `value` blob (which
//! duplicates the module path inside a small dictionary literal) is decoded,
//! patched, and re-encoded to match. All other archive entries are copied
//! bit-identically.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use jobfix::{convert, ConvertOptions, Result};
//!
//! fn main() -> Result<()> {
//!     let report = convert(
//!         Path::new("square.FCStd"),
//!         Path::new("square_current.FCStd"),
//!         &ConvertOptions::default(),
//!     )?;
//!
//!     for warning in &report.warnings {
//!         eprintln!("warning: {warning}");
//!     }
//!     println!(
//!         "{} modules renamed across {} patched entries",
//!         report.modules_renamed, report.entries_patched
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Guarantees
//!
//! - **All-or-nothing per file.** The output archive is staged in a temporary
//!   file and only moved into place after the whole source archive has been
//!   read and rewritten. A failed conversion leaves no partial output.
//! - **Fidelity.** Entries other than the two payload documents are copied
//!   raw, compressed bytes included; the archive-level comment is preserved.
//! - **One-directional.** The rename table maps old paths to new ones only.
//!   Running the tool on an already-migrated file is harmless: the new-form
//!   paths miss the table, produce warnings, and pass through unchanged.
//!
//! Unmapped module paths and unrecognized blob shapes are never errors; they
//! are collected on the returned [`ConvertReport`] and logged through the
//! [`log`] facade.

pub mod blob;
pub mod convert;
pub mod error;
pub mod patcher;
pub mod rename;
pub mod report;

pub use convert::{ConvertOptions, convert, rewrite};
pub use error::{Error, Result};
pub use rename::SectionKind;
pub use report::{ConvertReport, Warning};
