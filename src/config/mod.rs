//! Configuration module for ContentHash
//!
//! Provides CLI arguments, algorithm selection and runtime settings.

mod settings;

pub use settings::*;
