//! Per-file conversion report and warning taxonomy.

use crate::rename::SectionKind;

/// A recoverable condition encountered while patching a payload.
///
/// Warnings never interrupt a conversion; the affected reference is left in
/// its original form and the conversion continues.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Warning {
    /// A proxy module path had no entry in the rename table.
    UnmappedModule {
        /// The dotted module path as found in the document.
        module: String,
        /// Which payload the reference was found in.
        section: SectionKind,
    },
    /// A decoded blob had braces but was not the expected flat
    /// dictionary-literal shape, or carried none of the recognized keys.
    UnrecognizedBlob {
        /// What about the blob was not recognized.
        detail: String,
    },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::UnmappedModule { module, section } => {
                write!(f, "module {module} not substituted ({section})")
            }
            Warning::UnrecognizedBlob { detail } => {
                write!(f, "blob passed through unchanged: {detail}")
            }
        }
    }
}

/// Result of converting one archive.
///
/// Collects the entry counts and every warning raised while patching the
/// payloads, so a batch caller can aggregate diagnostics after the run.
#[must_use = "the report carries warnings that should be surfaced to the user"]
#[derive(Debug, Clone, Default)]
pub struct ConvertReport {
    /// Number of entries copied through bit-identically.
    pub entries_copied: usize,
    /// Number of payload entries run through the XML patcher.
    pub entries_patched: usize,
    /// Number of proxy module references rewritten.
    pub modules_renamed: usize,
    /// Recoverable conditions, in the order they were encountered.
    pub warnings: Vec<Warning>,
}

impl ConvertReport {
    /// Returns the total number of entries written to the output archive.
    pub fn total_entries(&self) -> usize {
        self.entries_copied + self.entries_patched
    }

    /// Returns whether any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Records a warning, mirroring it to the log facade.
    pub(crate) fn warn(&mut self, warning: Warning) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }
}
