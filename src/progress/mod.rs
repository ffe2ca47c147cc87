//! Progress reporting module
//!
//! Shows a byte progress bar while a large file is being hashed.

mod reporter;

pub use reporter::*;
