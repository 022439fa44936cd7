//! Archive rewriter: streams a source `.FCStd` archive into a patched copy.
//!
//! `Document.xml` and `GuiDocument.xml` are piped through the
//! [XML patcher](crate::patcher); every other entry is raw-copied, compressed
//! bytes and per-entry metadata included, so the output differs from the
//! input only where proxies were rewritten. The archive-level comment is
//! carried over verbatim.
//!
//! Conversion is all-or-nothing per file: [`convert`] stages the output in a
//! temporary file next to the destination and persists it only after the
//! whole source archive has been rewritten. Any failure drops the staged
//! file, leaving the destination untouched.

use std::fs::File;
use std::io::{BufReader, Read, Seek, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use zip::read::ZipArchive;
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::error::{Error, Result};
use crate::patcher;
use crate::rename::SectionKind;
use crate::report::ConvertReport;

/// Options for one file conversion.
///
/// Explicit per call rather than process-wide state, so batch callers can
/// thread one configuration through without globals.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    /// Replace the destination file if it already exists.
    pub overwrite: bool,
}

/// Converts one `.FCStd` file, writing the migrated archive to `dest`.
///
/// Refuses to proceed with [`Error::DestinationExists`] when `dest` exists
/// and `options.overwrite` is false. On success the destination holds the
/// complete rewritten archive; on error no output file is produced.
pub fn convert(source: &Path, dest: &Path, options: &ConvertOptions) -> Result<ConvertReport> {
    if !options.overwrite && dest.exists() {
        return Err(Error::DestinationExists(dest.to_path_buf()));
    }

    log::debug!("converting {} -> {}", source.display(), dest.display());
    let reader = BufReader::new(File::open(source)?);

    // Stage in the destination directory so the final rename stays on one
    // filesystem.
    let staging_dir = dest
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let staged = NamedTempFile::new_in(staging_dir)?;

    let report = rewrite(reader, staged.as_file())?;

    let persisted = if options.overwrite {
        staged.persist(dest)
    } else {
        staged.persist_noclobber(dest)
    };
    persisted.map_err(|e| Error::Io(e.error))?;

    Ok(report)
}

/// Rewrites a source archive stream into `sink`.
///
/// This is the in-memory core of [`convert`]; it performs no destination
/// handling of its own. Entries are processed strictly in source order.
pub fn rewrite<R, W>(source: R, sink: W) -> Result<ConvertReport>
where
    R: Read + Seek,
    W: Write + Seek,
{
    let mut archive = ZipArchive::new(source)?;
    let mut writer = ZipWriter::new(sink);
    writer.set_raw_comment(archive.comment().to_vec().into_boxed_slice());

    let mut report = ConvertReport::default();
    for index in 0..archive.len() {
        let kind = SectionKind::for_entry(archive.by_index_raw(index)?.name());
        match kind {
            None => {
                writer.raw_copy_file(archive.by_index_raw(index)?)?;
                report.entries_copied += 1;
            }
            Some(kind) => {
                let (name, options, xml) = read_payload(&mut archive, index)?;
                let patched = patcher::patch_document(&xml, kind, &mut report)?;
                writer.start_file(name, options)?;
                writer.write_all(&patched)?;
                report.entries_patched += 1;
            }
        }
    }

    writer.finish()?;
    Ok(report)
}

/// Inflates one payload entry, capturing the metadata needed to write its
/// replacement under the same name and compression settings.
fn read_payload<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    index: usize,
) -> Result<(String, SimpleFileOptions, Vec<u8>)> {
    let mut entry = archive.by_index(index)?;

    let mut options = SimpleFileOptions::default().compression_method(entry.compression());
    if let Some(mode) = entry.unix_mode() {
        options = options.unix_permissions(mode);
    }
    if let Some(modified) = entry.last_modified() {
        options = options.last_modified_time(modified);
    }

    let mut xml = Vec::with_capacity(entry.size() as usize);
    entry.read_to_end(&mut xml)?;
    Ok((entry.name().to_owned(), options, xml))
}
