// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Streaming rewrite of the exported icon-font stylesheet.
//!
//! Each line is classified on its own by plain substring matching; there is
//! no CSS parsing and no state carried from one line to the next. Lines are
//! handled as raw bytes so terminators and non-UTF-8 content survive intact.

use std::io::{self, BufRead, Write};

use crate::models::RewriteStats;

/// Marker of the WOFF `src` declaration that gets pointed at the vendored font.
pub const WOFF_MARKER: &[u8] = b"format('woff')";
/// Marker of any other font source declaration.
pub const URL_MARKER: &[u8] = b"url(";
/// Replacement for the WOFF declaration, relative to the stylesheet's directory.
pub const VENDORED_WOFF_SRC: &[u8] = b"  src: url('../fonts/h.woff') format('woff');\n";

/// What happens to a single stylesheet line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineAction {
    /// Write the line back unchanged.
    Keep,
    /// Write [`VENDORED_WOFF_SRC`] instead.
    RewriteWoff,
    /// Write nothing.
    Drop,
}

/// Classify a line; the WOFF check wins over the generic `url(` check.
pub fn classify(line: &[u8]) -> LineAction {
    if contains(line, WOFF_MARKER) {
        LineAction::RewriteWoff
    } else if contains(line, URL_MARKER) {
        LineAction::Drop
    } else {
        LineAction::Keep
    }
}

/// Copy `input` to `output` line by line, applying [`classify`] to each line.
///
/// # Errors
///
/// Returns the first read or write error; whatever was written before it stays written.
pub fn rewrite<R: BufRead, W: Write>(mut input: R, output: &mut W) -> io::Result<RewriteStats> {
    let mut stats = RewriteStats::default();
    let mut line = Vec::new();
    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        match classify(&line) {
            LineAction::Keep => {
                output.write_all(&line)?;
                stats.kept += 1;
            }
            LineAction::RewriteWoff => {
                output.write_all(VENDORED_WOFF_SRC)?;
                stats.rewritten += 1;
            }
            LineAction::Drop => stats.dropped += 1,
        }
    }
    Ok(stats)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}
