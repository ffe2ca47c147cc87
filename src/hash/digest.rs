//! Digest values and their hex rendering

use crate::config::HashAlgorithm;
use crate::error::{HashError, Result};
use serde::{Deserialize, Serialize};

/// Incremental digest primitive the [`StreamingHasher`](super::StreamingHasher)
/// drives.
///
/// Implementations must be chunking invariant: feeding `a` then `b` yields
/// the same digest as feeding `a ++ b` in one call.
pub trait ContentDigest {
    /// Absorb more data
    fn update(&mut self, data: &[u8]);

    /// Consume the accumulator and produce the digest
    fn finalize(self) -> Digest;

    /// Digest length in bytes
    fn output_size(&self) -> usize;
}

/// Fixed-length digest produced by finalizing a hasher
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest(Box<[u8]>);

impl Digest {
    /// Wrap raw digest bytes
    pub fn new(bytes: impl Into<Box<[u8]>>) -> Self {
        Self(bytes.into())
    }

    /// Parse a digest from hex (either case)
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str.trim())?;
        Ok(Self::new(bytes))
    }

    /// Parse a digest from hex and check it has the algorithm's length
    pub fn from_hex_for(hex_str: &str, algorithm: HashAlgorithm) -> Result<Self> {
        let digest = Self::from_hex(hex_str)?;
        if digest.len() != algorithm.output_size() {
            return Err(HashError::InvalidDigest(format!(
                "{} digest must be {} bytes, got {}",
                algorithm.name(),
                algorithm.output_size(),
                digest.len()
            )));
        }
        Ok(digest)
    }

    /// Raw digest bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Digest length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length digest
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex rendering
    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Render bytes as lowercase hex, high nibble first
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Hash result as hex string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashResult {
    /// The hash algorithm used
    pub algorithm: HashAlgorithm,
    /// Hash value as lowercase hex string
    pub hash: String,
    /// Number of bytes hashed
    pub size: u64,
}

impl HashResult {
    /// Create a new hash result
    pub fn new(algorithm: HashAlgorithm, digest: &Digest, size: u64) -> Self {
        Self {
            algorithm,
            hash: digest.to_hex(),
            size,
        }
    }

    /// Verify against another hash result
    pub fn verify(&self, other: &HashResult) -> bool {
        self.algorithm == other.algorithm && self.hash == other.hash
    }

    /// Compare against an expected hex string, ignoring case
    pub fn matches_hex(&self, expected: &str) -> bool {
        self.hash.eq_ignore_ascii_case(expected.trim())
    }
}

impl std::fmt::Display for HashResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&[]), "");
        assert_eq!(to_hex(&[0x00, 0x0f, 0xf0, 0xff]), "000ff0ff");
        assert_eq!(to_hex(&[0xab, 0x01]), "ab01");
    }

    #[test]
    fn test_to_hex_length_and_alphabet() {
        let bytes: Vec<u8> = (0..=255).collect();
        let hex = to_hex(&bytes);
        assert_eq!(hex.len(), 2 * bytes.len());
        assert!(hex.chars().all(|c| "0123456789abcdef".contains(c)));
    }

    #[test]
    fn test_from_hex() {
        let digest = Digest::from_hex("00FFab").unwrap();
        assert_eq!(digest.as_bytes(), &[0x00, 0xff, 0xab]);
        assert_eq!(digest.to_string(), "00ffab");

        assert!(matches!(Digest::from_hex("abc"), Err(HashError::InvalidDigest(_))));
        assert!(matches!(Digest::from_hex("zz"), Err(HashError::InvalidDigest(_))));
    }

    #[test]
    fn test_from_hex_checks_length() {
        let hex = "ab".repeat(8);
        assert!(Digest::from_hex_for(&hex, HashAlgorithm::XXHash64).is_ok());
        assert!(matches!(
            Digest::from_hex_for(&hex, HashAlgorithm::Dropbox),
            Err(HashError::InvalidDigest(_))
        ));
    }

    #[test]
    fn test_hash_result_matching() {
        let digest = Digest::new(vec![0xde, 0xad, 0xbe, 0xef]);
        let result = HashResult::new(HashAlgorithm::Sha256, &digest, 4);
        assert_eq!(result.hash, "deadbeef");
        assert!(result.matches_hex("DEADBEEF"));
        assert!(result.matches_hex(" deadbeef\n"));
        assert!(!result.matches_hex("deadbee0"));

        let other = HashResult::new(HashAlgorithm::Blake3, &digest, 4);
        assert!(!result.verify(&other));
        assert!(result.verify(&result.clone()));
    }
}
