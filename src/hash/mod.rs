//! Content hashing module
//!
//! A [`StreamingHasher`] drives any [`ContentDigest`] primitive. The default
//! primitive is the Dropbox block hash-of-hashes ([`BlockHasher`]); SHA-256,
//! BLAKE3 and XXHash are available through [`Hasher`].

mod block;
mod digest;
mod file;
mod hasher;
mod report;
mod streaming;

pub use block::*;
pub use digest::*;
pub use file::*;
pub use hasher::*;
pub use report::*;
pub use streaming::*;
