// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Business logic for vendoring an IcoMoon icon-font export.
//!
//! Responsibilities:
//! - Check the export archive carries the manifest, WOFF font and stylesheet.
//! - Copy the manifest and font verbatim into the vendor `fonts` directory.
//! - Rewrite the stylesheet so it only references the vendored WOFF font.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::{ImportError, Result};
use crate::logic::stylesheet;
use crate::models::layout::{FONT_ENTRY, MANIFEST_ENTRY, REQUIRED_ENTRIES, STYLESHEET_ENTRY};
use crate::models::{ImportReport, ManifestSummary, RewriteStats, VendorLayout};
use crate::utils::HashingWriter;

/// Import the export archive at `archive_path` into `layout`.
///
/// All three required entries are checked before anything is written, so a
/// missing entry leaves the vendor tree untouched. Failures after that point
/// may leave earlier files updated; nothing is rolled back. Vendor
/// directories are never created.
///
/// # Errors
///
/// - [`ImportError::ArchiveOpen`] when the archive is missing or not a zip.
/// - [`ImportError::EntryNotFound`] when a required entry is absent.
/// - [`ImportError::ArchiveRead`] when an entry cannot be decompressed.
/// - [`ImportError::DestinationWrite`] when a vendor file cannot be written.
pub fn import_archive(archive_path: &Path, layout: &VendorLayout) -> Result<ImportReport> {
    let mut archive = open_archive(archive_path)?;
    ensure_required_entries(&archive)?;

    let manifest_path = layout.manifest_path();
    let manifest_bytes = read_entry(&mut archive, MANIFEST_ENTRY)?;
    write_file(&manifest_path, &manifest_bytes)?;
    log::info!("Extracted {} to {}", MANIFEST_ENTRY, manifest_path.display());

    let manifest = match ManifestSummary::from_slice(&manifest_bytes) {
        Ok(summary) => Some(summary),
        Err(err) => {
            log::warn!(
                "{} is not readable JSON, copied as-is: {}",
                MANIFEST_ENTRY,
                err
            );
            None
        }
    };

    let font_path = layout.font_path();
    let font_sha256 = extract_entry(&mut archive, FONT_ENTRY, &font_path)?;
    log::info!("Extracted {} to {}", FONT_ENTRY, font_path.display());
    log::debug!("{} sha256 {}", FONT_ENTRY, font_sha256);

    let stylesheet_path = layout.stylesheet_path();
    let stats = rewrite_stylesheet(&mut archive, &stylesheet_path)?;
    log::info!(
        "Rewrote {} to {} ({} kept, {} rewritten, {} dropped)",
        STYLESHEET_ENTRY,
        stylesheet_path.display(),
        stats.kept,
        stats.rewritten,
        stats.dropped
    );
    if stats.rewritten == 0 {
        log::warn!("{} has no format('woff') source line", STYLESHEET_ENTRY);
    }

    Ok(ImportReport {
        manifest_path,
        font_path,
        stylesheet_path,
        font_sha256,
        stylesheet: stats,
        manifest,
    })
}

fn open_archive(path: &Path) -> Result<ZipArchive<File>> {
    let open = || -> std::result::Result<ZipArchive<File>, ZipError> {
        let file = File::open(path)?;
        ZipArchive::new(file)
    };
    let archive = open().map_err(|source| ImportError::ArchiveOpen {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Opened {:?} with {} entries", path, archive.len());
    Ok(archive)
}

fn ensure_required_entries<R: Read + io::Seek>(archive: &ZipArchive<R>) -> Result<()> {
    for name in REQUIRED_ENTRIES {
        if archive.index_for_name(name).is_none() {
            return Err(ImportError::EntryNotFound {
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

fn entry_error(name: &str, err: ZipError) -> ImportError {
    match err {
        ZipError::FileNotFound => ImportError::EntryNotFound {
            name: name.to_string(),
        },
        ZipError::Io(source) => ImportError::entry_read(name, source),
        other => {
            ImportError::entry_read(name, io::Error::new(io::ErrorKind::InvalidData, other))
        }
    }
}

fn read_entry<R: Read + io::Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<Vec<u8>> {
    let mut entry = archive.by_name(name).map_err(|err| entry_error(name, err))?;
    let mut bytes = Vec::new();
    entry
        .read_to_end(&mut bytes)
        .map_err(|err| ImportError::entry_read(name, err))?;
    Ok(bytes)
}

/// Stream an entry into `dest` without transcoding, returning its SHA-256.
fn extract_entry<R: Read + io::Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
    dest: &Path,
) -> Result<String> {
    let entry = archive.by_name(name).map_err(|err| entry_error(name, err))?;
    let file = File::create(dest).map_err(|err| ImportError::destination(dest, err))?;

    let mut input = ReadTracker::new(entry);
    let mut output = HashingWriter::new(file);
    match io::copy(&mut input, &mut output) {
        Ok(_) => Ok(output.finish().1),
        Err(err) if input.failed => Err(ImportError::entry_read(name, err)),
        Err(err) => Err(ImportError::destination(dest, err)),
    }
}

fn write_file(dest: &Path, bytes: &[u8]) -> Result<()> {
    let mut output = File::create(dest).map_err(|err| ImportError::destination(dest, err))?;
    output
        .write_all(bytes)
        .map_err(|err| ImportError::destination(dest, err))
}

fn rewrite_stylesheet<R: Read + io::Seek>(
    archive: &mut ZipArchive<R>,
    dest: &Path,
) -> Result<RewriteStats> {
    let entry = archive
        .by_name(STYLESHEET_ENTRY)
        .map_err(|err| entry_error(STYLESHEET_ENTRY, err))?;
    let file = File::create(dest).map_err(|err| ImportError::destination(dest, err))?;
    let mut output = BufWriter::new(file);

    let mut input = BufReader::new(ReadTracker::new(entry));
    match stylesheet::rewrite(&mut input, &mut output) {
        Ok(stats) => {
            output
                .flush()
                .map_err(|err| ImportError::destination(dest, err))?;
            Ok(stats)
        }
        Err(err) if input.get_ref().failed => {
            Err(ImportError::entry_read(STYLESHEET_ENTRY, err))
        }
        Err(err) => Err(ImportError::destination(dest, err)),
    }
}

/// Tells a failed entry read apart from a failed destination write.
///
/// Read and write failures both surface as `io::Error` from a copy loop.
struct ReadTracker<R> {
    inner: R,
    failed: bool,
}

impl<R> ReadTracker<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            failed: false,
        }
    }
}

impl<R: Read> Read for ReadTracker<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let result = self.inner.read(buf);
        if result.is_err() {
            self.failed = true;
        }
        result
    }
}
