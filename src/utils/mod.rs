// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities.

pub mod hash;

/// Hash bytes on their way to a writer.
pub use hash::HashingWriter;
