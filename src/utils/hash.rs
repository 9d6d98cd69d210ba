// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Hashing helper utilities.

use std::io::{self, Write};

use sha2::{Digest, Sha256};

/// Writer adapter that computes the SHA-256 of everything written through it.
///
/// # Examples
///
/// ```rust,ignore
/// let mut writer = HashingWriter::new(File::create("h.woff")?);
/// io::copy(&mut entry, &mut writer)?;
/// let (_file, digest) = writer.finish();
/// assert_eq!(digest.len(), 64);
/// ```
pub struct HashingWriter<W> {
    inner: W,
    hasher: Sha256,
}

impl<W: Write> HashingWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            hasher: Sha256::new(),
        }
    }

    /// Return the inner writer and the lowercase hex digest of the bytes it accepted.
    pub fn finish(self) -> (W, String) {
        (self.inner, hex::encode(self.hasher.finalize()))
    }
}

impl<W: Write> Write for HashingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.hasher.update(&buf[..written]);
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::HashingWriter;

    const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn hashing_writer_matches_known_digest() {
        let mut writer = HashingWriter::new(Vec::new());
        io::copy(&mut &b"abc"[..], &mut writer).unwrap();

        let (bytes, digest) = writer.finish();

        assert_eq!(bytes, b"abc");
        assert_eq!(digest, ABC_SHA256);
    }

    // Split writes hash the same as one contiguous write.
    #[test]
    fn hashing_writer_is_independent_of_chunking() {
        let mut writer = HashingWriter::new(io::sink());
        writer.write_all(b"a").unwrap();
        writer.write_all(b"bc").unwrap();

        assert_eq!(writer.finish().1, ABC_SHA256);
    }

    #[test]
    fn hashing_writer_propagates_write_errors() {
        let mut buffer = [0u8; 2];
        let mut writer = HashingWriter::new(&mut buffer[..]);

        assert!(writer.write_all(b"abc").is_err());
    }
}
