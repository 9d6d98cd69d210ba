// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: the vendor layout, archive entry names and import outcomes.

pub mod layout;
pub mod manifest;
pub mod report;

pub use layout::VendorLayout;
pub use manifest::ManifestSummary;
pub use report::{ImportReport, RewriteStats};
