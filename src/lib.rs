//! # ContentHash - Streaming Content Hashing
//!
//! ContentHash computes content-addressable hashes of files, compatible with
//! the Dropbox content-hash scheme: the input is split into 4 MiB blocks,
//! each block is hashed with SHA-256, and the content hash is the SHA-256 of
//! the concatenated block hashes.
//!
//! ## Features
//!
//! - **Streaming**: constant memory, any read size, same digest
//! - **Pluggable primitives**: anything implementing [`hash::ContentDigest`]
//! - **Other algorithms**: SHA-256, BLAKE3, XXHash3, XXHash64
//! - **Verification**: compare a file against an expected hex digest
//!
//! ## Quick Start
//!
//! ```no_run
//! use contenthash::hash::hash_file;
//! use contenthash::config::HashAlgorithm;
//! use std::path::Path;
//!
//! let result = hash_file(Path::new("photo.jpg"), HashAlgorithm::Dropbox).unwrap();
//! println!("{} ({} bytes)", result.hash, result.size);
//! ```
//!
//! ## Streaming
//!
//! ```
//! use contenthash::config::HashAlgorithm;
//! use contenthash::hash::StreamingHasher;
//!
//! let mut hasher = StreamingHasher::new(HashAlgorithm::Dropbox);
//! hasher.update(b"a");
//! hasher.update(b"bc");
//!
//! assert_eq!(
//!     hasher.finalize().to_hex(),
//!     "4f8b42c22dd3729b519ba6f68d2da7cc5b2d606d05daed5ad5128cc03e6c6358"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod hash;
pub mod progress;

// Re-export commonly used types
pub use config::{HashAlgorithm, HashConfig};
pub use error::{HashError, Result};
pub use hash::{ContentDigest, Digest, HashResult, StreamingHasher};
pub use progress::ProgressReporter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    //! Convenient re-exports for common usage
    //!
    //! ```no_run
    //! use contenthash::prelude::*;
    //! ```

    pub use crate::config::{HashAlgorithm, HashConfig};
    pub use crate::error::{HashError, Result};
    pub use crate::hash::{
        hash_bytes, hash_file, hash_with_config, to_hex, verify_file, BlockHasher, ContentDigest,
        Digest, FileReport, HashResult, Hasher, StreamingHasher,
    };
    pub use crate::progress::ProgressReporter;
}
