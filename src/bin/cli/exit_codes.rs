//! Exit codes for the CLI tool.

use jobfix::Error;

/// Exit code constants
pub const SUCCESS: i32 = 0;
/// Completed, but references were left unmigrated or files were skipped
pub const WARNING: i32 = 1;
/// Fatal error occurred
pub const FATAL_ERROR: i32 = 2;
/// Source was not a usable FCStd archive
pub const BAD_ARCHIVE: i32 = 3;
/// I/O error
pub const IO_ERROR: i32 = 5;
/// Invalid command line arguments
pub const BAD_ARGS: i32 = 255;

/// Exit code enum for structured handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)] // BadArgs raised by clap's own exit path
pub enum ExitCode {
    Success,
    Warning,
    FatalError,
    BadArchive,
    IoError,
    BadArgs,
}

impl ExitCode {
    /// Returns the numeric exit code
    pub fn code(self) -> i32 {
        match self {
            Self::Success => SUCCESS,
            Self::Warning => WARNING,
            Self::FatalError => FATAL_ERROR,
            Self::BadArchive => BAD_ARCHIVE,
            Self::IoError => IO_ERROR,
            Self::BadArgs => BAD_ARGS,
        }
    }

    /// Returns the more severe of two codes; batch runs exit with the worst
    /// code seen.
    pub fn worst(self, other: ExitCode) -> ExitCode {
        if other.code() > self.code() { other } else { self }
    }
}

/// Converts a jobfix error to an exit code
pub fn error_to_exit_code(error: &Error) -> ExitCode {
    match error {
        Error::Io(_) => ExitCode::IoError,
        // Recoverable in batch mode: the file is skipped, not failed.
        Error::DestinationExists(_) => ExitCode::Warning,
        Error::MalformedArchive(_) | Error::MalformedXml(_) | Error::MalformedBlob(_) => {
            ExitCode::BadArchive
        }
        // Future error variants - required by #[non_exhaustive]
        _ => ExitCode::FatalError,
    }
}
