//! Error types for job migration operations.
//!
//! All fallible operations in this crate return [`Result<T>`]. Errors are
//! fatal for the file being converted; in a batch run the caller reports the
//! error and moves on to the next file. Recoverable conditions (unmapped
//! module paths, unrecognized blob shapes) are not errors at all — they are
//! collected as [`Warning`](crate::report::Warning) values on the conversion
//! report.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use jobfix::{convert, ConvertOptions, Error};
//!
//! match convert(Path::new("job.FCStd"), Path::new("out.FCStd"), &ConvertOptions::default()) {
//!     Ok(report) => println!("{} modules renamed", report.modules_renamed),
//!     Err(Error::DestinationExists(path)) => {
//!         eprintln!("skipping, {} already exists", path.display());
//!     }
//!     Err(e) => eprintln!("conversion failed: {e}"),
//! }
//! ```

use std::io;
use std::path::PathBuf;

/// A specialized `Result` type for job migration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for job migration operations.
///
/// Every variant is fatal for the current file's conversion. The staged
/// output is discarded, so none of these leave a partial destination archive
/// behind.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The destination file already exists and overwriting was not requested.
    ///
    /// Recoverable from the caller's point of view: report it, skip the
    /// file, and continue. The existing destination is left untouched.
    #[error("destination '{}' already exists (pass overwrite to replace it)", .0.display())]
    DestinationExists(PathBuf),

    /// The source could not be read as a zip archive.
    #[error("not a valid FCStd archive: {0}")]
    MalformedArchive(#[from] zip::result::ZipError),

    /// A targeted payload (`Document.xml` or `GuiDocument.xml`) could not be
    /// parsed as XML.
    #[error("malformed XML payload: {0}")]
    MalformedXml(#[from] quick_xml::Error),

    /// A proxy `value` attribute that should hold Base64 text did not decode.
    ///
    /// The blob duplicates the module reference; a value that fails to
    /// decode means the document is damaged in a way this tool must not
    /// paper over, so the whole file's conversion is aborted.
    #[error("malformed proxy blob: {0}")]
    MalformedBlob(String),
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::MalformedXml(err.into())
    }
}

impl From<quick_xml::escape::EscapeError> for Error {
    fn from(err: quick_xml::escape::EscapeError) -> Self {
        Error::MalformedXml(err.into())
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Error::MalformedBlob(err.to_string())
    }
}
