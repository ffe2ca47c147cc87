//! Dropbox content hash
//!
//! The input is split into 4 MiB blocks. Every block is hashed with
//! SHA-256 and the content hash is the SHA-256 of the concatenated block
//! digests. See <https://www.dropbox.com/developers/reference/content-hash>.

use super::digest::{ContentDigest, Digest};
use crate::error::{HashError, Result};
use sha2::{Digest as _, Sha256};

/// Block size of the Dropbox content hash (4 MiB)
pub const BLOCK_SIZE: usize = 4 * 1024 * 1024;

/// Incremental block hash-of-hashes accumulator
#[derive(Clone)]
pub struct BlockHasher {
    /// Hash over the block digests
    overall: Sha256,
    /// Hash of the block currently being filled
    block: Sha256,
    /// Bytes absorbed into the current block
    block_pos: usize,
    block_size: usize,
    blocks: u64,
}

impl BlockHasher {
    /// Create a hasher using the Dropbox block size
    pub fn new() -> Self {
        Self {
            overall: Sha256::new(),
            block: Sha256::new(),
            block_pos: 0,
            block_size: BLOCK_SIZE,
            blocks: 0,
        }
    }

    /// Create a hasher with a custom block size
    pub fn with_block_size(block_size: usize) -> Result<Self> {
        if block_size == 0 {
            return Err(HashError::config("block size must be greater than zero"));
        }
        Ok(Self {
            block_size,
            ..Self::new()
        })
    }

    /// Block size in bytes
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Number of completed blocks folded into the overall hash so far
    pub fn blocks_completed(&self) -> u64 {
        self.blocks
    }

    fn close_block(&mut self) {
        let block_digest = self.block.finalize_reset();
        self.overall.update(block_digest);
        self.block_pos = 0;
        self.blocks += 1;
    }
}

impl Default for BlockHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentDigest for BlockHasher {
    fn update(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            // A full block is only closed once more input shows up, so an
            // input of exactly k blocks ends with a full pending block.
            if self.block_pos == self.block_size {
                self.close_block();
            }

            let take = (self.block_size - self.block_pos).min(data.len());
            self.block.update(&data[..take]);
            self.block_pos += take;
            data = &data[take..];
        }
    }

    fn finalize(mut self) -> Digest {
        if self.block_pos > 0 {
            self.close_block();
        }
        Digest::new(self.overall.finalize().to_vec())
    }

    fn output_size(&self) -> usize {
        32
    }
}
