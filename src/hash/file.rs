//! File hashing and verification
//!
//! Streams a byte source through a [`StreamingHasher`] in fixed-size reads.
//! The buffer size only affects throughput, never the resulting digest.

use super::digest::{ContentDigest, Digest, HashResult};
use super::hasher::Hasher;
use super::streaming::StreamingHasher;
use crate::config::{HashAlgorithm, DEFAULT_BUFFER_SIZE};
use crate::error::{HashError, IoResultExt, Result};
use crate::progress::ProgressReporter;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

/// Feed `reader` into `digest` until EOF, `buffer_size` bytes at a time.
///
/// Returns the digest and the number of bytes read. Interrupted reads are
/// retried; any other read error is returned as is.
pub fn digest_reader<R: Read, D: ContentDigest>(
    mut reader: R,
    digest: D,
    buffer_size: usize,
) -> io::Result<(Digest, u64)> {
    if buffer_size == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "buffer size must be greater than zero",
        ));
    }

    let mut hasher = StreamingHasher::with_digest(digest);
    let mut buffer = vec![0u8; buffer_size];

    loop {
        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        hasher.update(&buffer[..bytes_read]);
    }

    let size = hasher.bytes_processed();
    Ok((hasher.finalize(), size))
}

/// Compute hash of a file
pub fn hash_file(path: &Path, algorithm: HashAlgorithm) -> Result<HashResult> {
    hash_file_with_buffer(path, algorithm, DEFAULT_BUFFER_SIZE)
}

/// Compute hash of a file with custom buffer size
pub fn hash_file_with_buffer(
    path: &Path,
    algorithm: HashAlgorithm,
    buffer_size: usize,
) -> Result<HashResult> {
    hash_file_with_progress(path, algorithm, buffer_size, &mut ProgressReporter::disabled())
}

/// Compute hash of a file, reporting read progress
pub fn hash_file_with_progress(
    path: &Path,
    algorithm: HashAlgorithm,
    buffer_size: usize,
    progress: &mut ProgressReporter,
) -> Result<HashResult> {
    if buffer_size == 0 {
        return Err(HashError::config("buffer size must be greater than zero"));
    }

    // Closed on drop, including when a read fails partway through
    let file = File::open(path).with_path(path)?;
    let expected_size = file.metadata().with_path(path)?.len();

    // No point allocating more than the file holds; a file that grows
    // mid-read is still consumed to EOF
    let read_size = usize::try_from(expected_size.max(1)).map_or(buffer_size, |n| n.min(buffer_size));

    debug!(
        path = %path.display(),
        algorithm = algorithm.name(),
        size = expected_size,
        buffer_size = read_size,
        "Hashing file"
    );

    progress.start(expected_size);
    let outcome = digest_reader(progress.wrap_read(file), Hasher::new(algorithm), read_size);
    progress.finish();
    let (digest, size) = outcome.with_path(path)?;

    if size != expected_size {
        warn!(
            path = %path.display(),
            expected = expected_size,
            actual = size,
            "File size changed while hashing"
        );
    }

    let result = HashResult::new(algorithm, &digest, size);
    debug!(
        path = %path.display(),
        hash = %result.hash,
        elapsed = ?progress.elapsed(),
        "Hashed file"
    );

    Ok(result)
}

/// Compute hash of data in memory
pub fn hash_bytes(data: &[u8], algorithm: HashAlgorithm) -> HashResult {
    let mut hasher = StreamingHasher::new(algorithm);
    hasher.update(data);
    hasher.finish()
}

/// Result of comparing a computed hash with an expected one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Expected hash as supplied, lowercased
    pub expected: String,
    /// Computed hash
    pub actual: HashResult,
    /// Whether the hashes match
    pub matches: bool,
}

/// Compare a computed hash with an expected hex digest.
///
/// The expected digest must be valid hex of the algorithm's output size.
pub fn verify_hash(actual: &HashResult, expected: &str) -> Result<VerificationResult> {
    let expected = Digest::from_hex_for(expected, actual.algorithm)?.to_hex();
    let matches = actual.matches_hex(&expected);

    Ok(VerificationResult {
        expected,
        actual: actual.clone(),
        matches,
    })
}

/// Verify a file against an expected hex digest
pub fn verify_file(
    path: &Path,
    expected: &str,
    algorithm: HashAlgorithm,
) -> Result<VerificationResult> {
    // Reject a malformed digest before touching the file
    Digest::from_hex_for(expected, algorithm)?;
    let actual = hash_file(path, algorithm)?;
    verify_hash(&actual, expected)
}

/// Benchmark hash algorithms
pub fn benchmark_algorithms(data_size: usize) -> Vec<(HashAlgorithm, Duration, f64)> {
    let data: Vec<u8> = (0..data_size).map(|i| (i % 256) as u8).collect();
    let mut results = Vec::new();

    for algorithm in HashAlgorithm::ALL {
        let start = std::time::Instant::now();
        let iterations = 10;

        for _ in 0..iterations {
            hash_bytes(&data, algorithm);
        }

        let duration = start.elapsed() / iterations;
        let throughput = (data_size as f64) / duration.as_secs_f64().max(f64::EPSILON) / (1024.0 * 1024.0);

        results.push((algorithm, duration, throughput));
    }

    results.sort_by(|a, b| a.1.cmp(&b.1));
    results
}
