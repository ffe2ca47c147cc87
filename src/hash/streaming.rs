//! Streaming hasher
//!
//! Wraps any [`ContentDigest`] and counts the bytes fed through it.
//! `finalize` consumes the hasher, so a finalized hasher can neither be
//! updated nor finalized again.

use super::digest::{ContentDigest, Digest, HashResult};
use super::hasher::Hasher;
use crate::config::HashAlgorithm;
use std::io;

/// Streaming hasher over an incremental digest primitive
pub struct StreamingHasher<D: ContentDigest = Hasher> {
    digest: D,
    bytes_processed: u64,
}

impl StreamingHasher<Hasher> {
    /// Create a new streaming hasher for the given algorithm
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self::with_digest(Hasher::new(algorithm))
    }

    /// Algorithm in use
    pub fn algorithm(&self) -> HashAlgorithm {
        self.digest.algorithm()
    }

    /// Finalize into a [`HashResult`]
    pub fn finish(self) -> HashResult {
        let algorithm = self.algorithm();
        let size = self.bytes_processed;
        HashResult::new(algorithm, &self.finalize(), size)
    }
}

impl<D: ContentDigest> StreamingHasher<D> {
    /// Create a streaming hasher over an arbitrary digest primitive
    pub fn with_digest(digest: D) -> Self {
        Self {
            digest,
            bytes_processed: 0,
        }
    }

    /// Process a chunk of data
    pub fn update(&mut self, data: &[u8]) {
        self.digest.update(data);
        self.bytes_processed += data.len() as u64;
    }

    /// Get bytes processed so far
    pub fn bytes_processed(&self) -> u64 {
        self.bytes_processed
    }

    /// Digest length in bytes
    pub fn output_size(&self) -> usize {
        self.digest.output_size()
    }

    /// Finalize and get the digest
    pub fn finalize(self) -> Digest {
        self.digest.finalize()
    }
}

impl<D: ContentDigest> io::Write for StreamingHasher<D> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
