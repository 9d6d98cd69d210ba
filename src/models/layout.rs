// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Fixed archive entry names and the vendored destination tree.

use std::path::{Path, PathBuf};

/// Icon selection manifest inside the export archive.
pub const MANIFEST_ENTRY: &str = "selection.json";
/// WOFF font binary inside the export archive.
pub const FONT_ENTRY: &str = "fonts/h.woff";
/// Generated stylesheet inside the export archive.
pub const STYLESHEET_ENTRY: &str = "style.css";

/// Every entry an import needs, in extraction order.
pub const REQUIRED_ENTRIES: [&str; 3] = [MANIFEST_ENTRY, FONT_ENTRY, STYLESHEET_ENTRY];

const FONTS_DIR: &str = "fonts";
const STYLESHEET_FILE: &str = "icomoon.css";

/// Vendor assets root, relative to this crate's directory.
const INSTALLED_VENDOR_DIR: &str = "../src/styles/vendor";

/// The vendor directory that receives the imported assets.
///
/// The tree is expected to exist already; nothing here creates directories.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VendorLayout {
    root: PathBuf,
}

impl VendorLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Layout next to the utility's sources: `<crate>/../src/styles/vendor`.
    ///
    /// The crate directory is captured at build time, not resolved from the
    /// running executable. A binary copied to another machine still targets
    /// the vendor tree of the checkout it was built from; run it from that
    /// checkout (`cargo run -- <archive>`).
    pub fn installed() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join(INSTALLED_VENDOR_DIR))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `V/fonts`, home of the manifest and the font binary.
    pub fn fonts_dir(&self) -> PathBuf {
        self.root.join(FONTS_DIR)
    }

    /// Manifest destination, keeping the entry's own file name.
    pub fn manifest_path(&self) -> PathBuf {
        self.fonts_dir().join(MANIFEST_ENTRY)
    }

    /// Font destination; the entry's relative path is kept below the root.
    pub fn font_path(&self) -> PathBuf {
        self.root.join(FONT_ENTRY)
    }

    pub fn stylesheet_path(&self) -> PathBuf {
        self.root.join(STYLESHEET_FILE)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{REQUIRED_ENTRIES, VendorLayout};

    #[test]
    fn destinations_follow_vendor_contract() {
        let layout = VendorLayout::new("/srv/client/src/styles/vendor");

        assert_eq!(
            layout.manifest_path(),
            PathBuf::from("/srv/client/src/styles/vendor/fonts/selection.json")
        );
        assert_eq!(
            layout.font_path(),
            PathBuf::from("/srv/client/src/styles/vendor/fonts/h.woff")
        );
        assert_eq!(
            layout.stylesheet_path(),
            PathBuf::from("/srv/client/src/styles/vendor/icomoon.css")
        );
    }

    // The manifest and the font must share a directory so the rewritten
    // stylesheet's `../fonts/h.woff` resolves from the vendor root.
    #[test]
    fn manifest_and_font_share_fonts_dir() {
        let layout = VendorLayout::new("vendor");
        let fonts = layout.fonts_dir();

        assert_eq!(layout.manifest_path().parent(), Some(fonts.as_path()));
        assert_eq!(layout.font_path().parent(), Some(fonts.as_path()));
    }

    #[test]
    fn installed_layout_sits_beside_crate() {
        let layout = VendorLayout::installed();

        assert!(layout.root().starts_with(env!("CARGO_MANIFEST_DIR")));
        assert!(layout.root().ends_with("src/styles/vendor"));
    }

    #[test]
    fn required_entries_are_distinct() {
        let [a, b, c] = REQUIRED_ENTRIES;
        assert!(a != b && b != c && a != c);
    }
}
