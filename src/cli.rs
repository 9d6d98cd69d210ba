// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Update the vendored IcoMoon icon font from an export archive.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Path to the .zip file generated by IcoMoon
    pub archive: PathBuf,
}
