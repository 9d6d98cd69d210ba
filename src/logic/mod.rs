// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Import pipeline and the stylesheet rewrite it relies on.

pub mod import;
pub mod stylesheet;

pub use import::import_archive;
