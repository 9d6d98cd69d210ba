// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Error taxonomy for importing an icon-font archive.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use zip::result::ZipError;

/// Every way an import can fail. None of these are recovered locally.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The archive path is missing, unreadable, or not a zip container.
    #[error("Failed to open icon font archive {path:?}")]
    ArchiveOpen {
        path: PathBuf,
        #[source]
        source: ZipError,
    },
    /// One of the required entries is absent from the archive.
    #[error("Archive is missing required entry `{name}`")]
    EntryNotFound { name: String },
    /// The entry exists but its data could not be read back.
    #[error("Failed to read entry `{name}` from archive")]
    ArchiveRead {
        name: String,
        #[source]
        source: io::Error,
    },
    /// A destination file could not be created or written.
    #[error("Failed to write {path:?}")]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ImportError {
    pub(crate) fn destination(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ImportError::DestinationWrite {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn entry_read(name: &str, source: io::Error) -> Self {
        ImportError::ArchiveRead {
            name: name.to_string(),
            source,
        }
    }
}

/// Result type alias for import operations.
pub type Result<T> = std::result::Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::io;

    use super::ImportError;

    #[test]
    fn entry_not_found_names_the_entry() {
        let err = ImportError::EntryNotFound {
            name: "style.css".into(),
        };
        assert_eq!(err.to_string(), "Archive is missing required entry `style.css`");
    }

    #[test]
    fn destination_write_keeps_io_source() {
        let err = ImportError::destination(
            "/vendor/icomoon.css",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );

        assert!(err.to_string().contains("icomoon.css"));
        let source = err.source().expect("io source attached");
        assert_eq!(source.to_string(), "denied");
    }
}
