// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Outcome of a successful import.

use std::fmt;
use std::path::PathBuf;

use super::manifest::ManifestSummary;

/// Per-line tally of a stylesheet rewrite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Lines written unchanged.
    pub kept: usize,
    /// WOFF source lines replaced by the vendored `src` line.
    pub rewritten: usize,
    /// Other `url(` lines left out.
    pub dropped: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportReport {
    pub manifest_path: PathBuf,
    pub font_path: PathBuf,
    pub stylesheet_path: PathBuf,
    /// Lowercase hex SHA-256 of the vendored font.
    pub font_sha256: String,
    pub stylesheet: RewriteStats,
    /// `None` when the manifest is not readable JSON.
    pub manifest: Option<ManifestSummary>,
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated {}", self.manifest_path.display())?;
        writeln!(
            f,
            "Updated {} (sha256 {})",
            self.font_path.display(),
            self.font_sha256
        )?;
        write!(
            f,
            "Updated {} ({} kept, {} rewritten, {} dropped)",
            self.stylesheet_path.display(),
            self.stylesheet.kept,
            self.stylesheet.rewritten,
            self.stylesheet.dropped
        )?;
        if let Some(manifest) = &self.manifest {
            write!(f, "\n{} icons", manifest.icon_count)?;
            if let Some(family) = &manifest.font_family {
                write!(f, " in font family `{}`", family)?;
            }
        }
        Ok(())
    }
}
