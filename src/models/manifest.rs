// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Lenient view of the IcoMoon `selection.json` manifest.
//!
//! Only used to describe an import; the manifest itself is copied verbatim
//! and never validated beyond being present in the archive.

use serde::Deserialize;

/// What the run summary reports about the selected icons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestSummary {
    pub icon_count: usize,
    pub font_family: Option<String>,
}

#[derive(Deserialize)]
struct Selection {
    #[serde(default)]
    icons: Vec<serde::de::IgnoredAny>,
    #[serde(default)]
    preferences: Preferences,
}

#[derive(Default, Deserialize)]
struct Preferences {
    #[serde(default, rename = "fontPref")]
    font_pref: FontPref,
}

#[derive(Default, Deserialize)]
struct FontPref {
    #[serde(default)]
    metadata: FontMetadata,
}

#[derive(Default, Deserialize)]
struct FontMetadata {
    #[serde(default, rename = "fontFamily")]
    font_family: Option<String>,
}

impl ManifestSummary {
    /// Summarize a manifest, failing only when it is not a JSON object of the
    /// expected rough shape.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        let selection: Selection = serde_json::from_slice(bytes)?;
        Ok(Self {
            icon_count: selection.icons.len(),
            font_family: selection.preferences.font_pref.metadata.font_family,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ManifestSummary;

    #[test]
    fn summarizes_icons_and_font_family() {
        let json = br#"{
            "IcoMoonType": "selection",
            "icons": [
                {"icon": {"paths": ["M0 0"]}, "properties": {"name": "close"}},
                {"icon": {"paths": ["M1 1"]}, "properties": {"name": "edit"}}
            ],
            "preferences": {"fontPref": {"metadata": {"fontFamily": "h"}}}
        }"#;

        let summary = ManifestSummary::from_slice(json).unwrap();

        assert_eq!(summary.icon_count, 2);
        assert_eq!(summary.font_family.as_deref(), Some("h"));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let summary = ManifestSummary::from_slice(b"{}").unwrap();

        assert_eq!(summary.icon_count, 0);
        assert_eq!(summary.font_family, None);
    }

    #[test]
    fn non_json_is_an_error() {
        assert!(ManifestSummary::from_slice(b"not json").is_err());
    }
}
