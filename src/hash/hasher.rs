//! Runtime-selected hash algorithm

use super::block::BlockHasher;
use super::digest::{ContentDigest, Digest};
use crate::config::HashAlgorithm;

/// Unified hasher that supports all algorithms
pub enum Hasher {
    /// Dropbox content hash
    Dropbox(BlockHasher),
    /// SHA-256
    Sha256(sha2::Sha256),
    /// BLAKE3
    Blake3(blake3::Hasher),
    /// XXHash3 128-bit
    XXHash3(xxhash_rust::xxh3::Xxh3),
    /// XXHash64
    XXHash64(xxhash_rust::xxh64::Xxh64),
}

impl Hasher {
    /// Create a new hasher for the given algorithm
    pub fn new(algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::Dropbox => Self::Dropbox(BlockHasher::new()),
            HashAlgorithm::Sha256 => Self::Sha256(<sha2::Sha256 as sha2::Digest>::new()),
            HashAlgorithm::Blake3 => Self::Blake3(blake3::Hasher::new()),
            HashAlgorithm::XXHash3 => Self::XXHash3(xxhash_rust::xxh3::Xxh3::new()),
            HashAlgorithm::XXHash64 => Self::XXHash64(xxhash_rust::xxh64::Xxh64::new(0)),
        }
    }

    /// Get the algorithm this hasher uses
    pub fn algorithm(&self) -> HashAlgorithm {
        match self {
            Self::Dropbox(_) => HashAlgorithm::Dropbox,
            Self::Sha256(_) => HashAlgorithm::Sha256,
            Self::Blake3(_) => HashAlgorithm::Blake3,
            Self::XXHash3(_) => HashAlgorithm::XXHash3,
            Self::XXHash64(_) => HashAlgorithm::XXHash64,
        }
    }
}

impl ContentDigest for Hasher {
    fn update(&mut self, data: &[u8]) {
        match self {
            Self::Dropbox(h) => h.update(data),
            Self::Sha256(h) => sha2::Digest::update(h, data),
            Self::Blake3(h) => {
                h.update(data);
            }
            Self::XXHash3(h) => h.update(data),
            Self::XXHash64(h) => h.update(data),
        }
    }

    fn finalize(self) -> Digest {
        match self {
            Self::Dropbox(h) => h.finalize(),
            Self::Sha256(h) => Digest::new(sha2::Digest::finalize(h).to_vec()),
            Self::Blake3(h) => Digest::new(h.finalize().as_bytes().to_vec()),
            // Big-endian so the hex matches the usual `{:032x}` rendering
            Self::XXHash3(h) => Digest::new(h.digest128().to_be_bytes().to_vec()),
            Self::XXHash64(h) => Digest::new(h.digest().to_be_bytes().to_vec()),
        }
    }

    fn output_size(&self) -> usize {
        self.algorithm().output_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_of(algorithm: HashAlgorithm, data: &[u8]) -> String {
        let mut hasher = Hasher::new(algorithm);
        hasher.update(data);
        hasher.finalize().to_hex()
    }

    #[test]
    fn test_output_sizes() {
        for algorithm in HashAlgorithm::ALL {
            let hasher = Hasher::new(algorithm);
            assert_eq!(hasher.algorithm(), algorithm);
            assert_eq!(hasher.output_size(), algorithm.output_size());
            assert_eq!(hasher.finalize().len(), algorithm.output_size());
        }
    }

    #[test]
    fn test_sha256_vector() {
        assert_eq!(
            hex_of(HashAlgorithm::Sha256, b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_blake3_matches_crate() {
        assert_eq!(
            hex_of(HashAlgorithm::Blake3, b"Hello, World!"),
            blake3::hash(b"Hello, World!").to_hex().to_string()
        );
    }

    #[test]
    fn test_xxhash_rendering() {
        let data = b"Hello, World!";
        assert_eq!(
            hex_of(HashAlgorithm::XXHash3, data),
            format!("{:032x}", xxhash_rust::xxh3::xxh3_128(data))
        );
        assert_eq!(
            hex_of(HashAlgorithm::XXHash64, data),
            format!("{:016x}", xxhash_rust::xxh64::xxh64(data, 0))
        );
    }

    #[test]
    fn test_dropbox_dispatch() {
        let mut direct = BlockHasher::new();
        direct.update(b"abc");
        assert_eq!(hex_of(HashAlgorithm::Dropbox, b"abc"), direct.finalize().to_hex());
    }
}
