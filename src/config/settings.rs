//! Configuration settings for ContentHash
//!
//! Defines the CLI arguments, the hash algorithm selection and the
//! runtime configuration derived from them.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default read buffer for file hashing (1 MiB)
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;

/// Largest accepted read buffer (256 MiB)
pub const MAX_BUFFER_SIZE: usize = 256 * 1024 * 1024;

/// Largest accepted benchmark data size (1 GiB)
pub const MAX_BENCHMARK_SIZE: usize = 1024 * 1024 * 1024;

/// ContentHash - content-addressable file hashing
#[derive(Parser, Debug, Clone)]
#[command(name = "contenthash")]
#[command(author = "ContentHash Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compute Dropbox-compatible content hashes of files")]
#[command(long_about = r#"
ContentHash computes a content-addressable hash of a file.

The default algorithm is the Dropbox content hash: the file is split into
4 MiB blocks, each block is hashed with SHA-256, and the final hash is the
SHA-256 of the concatenated block hashes.

Examples:
  contenthash photo.jpg                         # Dropbox content hash
  contenthash photo.jpg --algorithm blake3      # Other algorithm
  contenthash photo.jpg --verify 4f8b42c2...    # Compare with expected hash
  contenthash photo.jpg --output-format json    # Machine-readable output
  contenthash benchmark --size 64M              # Algorithm throughput
"#)]
pub struct CliArgs {
    /// File to hash
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Hash algorithm
    #[arg(short = 'a', long, value_enum, default_value = "dropbox", value_name = "ALGO")]
    pub algorithm: HashAlgorithm,

    /// Read buffer size (e.g., 1M, 64K, 1024)
    #[arg(short = 'b', long, default_value = "1M", value_name = "SIZE")]
    pub buffer_size: String,

    /// Expected hash as hex; exit with an error if it does not match
    #[arg(long, value_name = "HEX")]
    pub verify: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Show a progress bar while hashing
    #[arg(short = 'p', long)]
    pub progress: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl CliArgs {
    /// Log level implied by `-v` / `-q`
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Measure in-memory throughput of every hash algorithm
    #[command(name = "benchmark")]
    Benchmark {
        /// Amount of data to hash per algorithm (e.g., 10M)
        #[arg(short, long, default_value = "10M")]
        size: String,
    },
}

/// Hash algorithm used to compute a content hash
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// Dropbox content hash - SHA-256 over per-4MiB-block SHA-256 digests
    #[default]
    #[value(name = "dropbox")]
    Dropbox,
    /// SHA-256 - Standard cryptographic hash
    #[value(name = "sha256")]
    Sha256,
    /// BLAKE3 - Fast and cryptographically secure
    #[value(name = "blake3")]
    Blake3,
    /// XXHash3 - Ultra fast, non-cryptographic (128-bit)
    #[value(name = "xxhash3")]
    XXHash3,
    /// XXHash64 - Fast, non-cryptographic (64-bit)
    #[value(name = "xxhash64")]
    XXHash64,
}

impl HashAlgorithm {
    /// All supported algorithms
    pub const ALL: [HashAlgorithm; 5] = [
        Self::Dropbox,
        Self::Sha256,
        Self::Blake3,
        Self::XXHash3,
        Self::XXHash64,
    ];

    /// Get the output size in bytes
    pub fn output_size(&self) -> usize {
        match self {
            Self::Dropbox => 32,
            Self::Sha256 => 32,
            Self::Blake3 => 32,
            Self::XXHash3 => 16,
            Self::XXHash64 => 8,
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dropbox => "Dropbox",
            Self::Sha256 => "SHA-256",
            Self::Blake3 => "BLAKE3",
            Self::XXHash3 => "XXHash3",
            Self::XXHash64 => "XXHash64",
        }
    }
}

/// Output format for hash reports
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `<hash>  <path>`
    #[default]
    Text,
    /// JSON object
    Json,
}

/// Runtime configuration for hashing a single file
#[derive(Debug, Clone)]
pub struct HashConfig {
    /// File to hash
    pub file: PathBuf,
    /// Algorithm to use
    pub algorithm: HashAlgorithm,
    /// Read buffer size in bytes
    pub buffer_size: usize,
    /// Expected hash (hex) to verify against
    pub expected: Option<String>,
    /// Output format
    pub output_format: OutputFormat,
    /// Show progress bar
    pub progress: bool,
    /// Suppress normal output
    pub quiet: bool,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::new(),
            algorithm: HashAlgorithm::default(),
            buffer_size: DEFAULT_BUFFER_SIZE,
            expected: None,
            output_format: OutputFormat::default(),
            progress: false,
            quiet: false,
        }
    }
}

impl HashConfig {
    /// Create config from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self, String> {
        let file = args.file.clone().ok_or("File path required")?;

        let buffer_size = parse_bounded_size(&args.buffer_size, MAX_BUFFER_SIZE)
            .map_err(|e| format!("Invalid buffer size: {}", e))?;

        Ok(Self {
            file,
            algorithm: args.algorithm,
            buffer_size,
            expected: args.verify.clone(),
            output_format: args.output_format,
            progress: args.progress && !args.quiet,
            quiet: args.quiet,
        })
    }
}

/// Parse human-readable size string to bytes
pub fn parse_size(size: &str) -> Result<u64, String> {
    let size = size.trim().to_uppercase();

    if size.is_empty() {
        return Err("Empty size string".to_string());
    }

    let (num_str, multiplier) = if size.ends_with("GB") || size.ends_with('G') {
        let num = size.trim_end_matches(|c| c == 'G' || c == 'B');
        (num, 1024u64 * 1024 * 1024)
    } else if size.ends_with("MB") || size.ends_with('M') {
        let num = size.trim_end_matches(|c| c == 'M' || c == 'B');
        (num, 1024u64 * 1024)
    } else if size.ends_with("KB") || size.ends_with('K') {
        let num = size.trim_end_matches(|c| c == 'K' || c == 'B');
        (num, 1024u64)
    } else if size.ends_with('B') {
        let num = size.trim_end_matches('B');
        (num, 1u64)
    } else {
        // Assume bytes if no suffix
        (size.as_str(), 1u64)
    };

    let num: f64 = num_str
        .trim()
        .parse()
        .map_err(|_| format!("Invalid number: {}", num_str))?;

    if !num.is_finite() || num < 0.0 {
        return Err(format!("Invalid number: {}", num_str));
    }

    let bytes = num * multiplier as f64;
    // `as` saturates, so out-of-range values must be caught here
    if bytes >= u64::MAX as f64 {
        return Err(format!("Size too large: {}", size));
    }

    Ok(bytes as u64)
}

/// Parse a size that must be in `1..=max` bytes
pub fn parse_bounded_size(size: &str, max: usize) -> Result<usize, String> {
    let bytes = parse_size(size)?;

    if bytes == 0 {
        return Err("must be greater than zero".to_string());
    }
    if bytes > max as u64 {
        return Err(format!(
            "{} exceeds the limit of {}",
            humansize::format_size(bytes, humansize::BINARY),
            humansize::format_size(max as u64, humansize::BINARY)
        ));
    }

    Ok(bytes as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("1024").unwrap(), 1024);
        assert_eq!(parse_size("1K").unwrap(), 1024);
        assert_eq!(parse_size("64KB").unwrap(), 64 * 1024);
        assert_eq!(parse_size("1M").unwrap(), 1024 * 1024);
        assert_eq!(parse_size("1g").unwrap(), 1024 * 1024 * 1024);
        assert_eq!(parse_size("1.5M").unwrap(), (1.5 * 1024.0 * 1024.0) as u64);
        assert!(parse_size("").is_err());
        assert!(parse_size("lots").is_err());
        assert!(parse_size("-1K").is_err());
        assert!(parse_size("1e30").is_err());
        assert!(parse_size("1e30G").is_err());
    }

    #[test]
    fn test_parse_bounded_size() {
        assert_eq!(parse_bounded_size("64K", MAX_BUFFER_SIZE).unwrap(), 64 * 1024);
        assert_eq!(parse_bounded_size("256M", MAX_BUFFER_SIZE).unwrap(), MAX_BUFFER_SIZE);
        assert!(parse_bounded_size("257M", MAX_BUFFER_SIZE).is_err());
        assert!(parse_bounded_size("0", MAX_BUFFER_SIZE).is_err());
        assert!(parse_bounded_size("1e30", MAX_BENCHMARK_SIZE).is_err());
    }

    #[test]
    fn test_hash_algorithm() {
        assert_eq!(HashAlgorithm::default(), HashAlgorithm::Dropbox);
        assert_eq!(HashAlgorithm::Dropbox.output_size(), 32);
        assert_eq!(HashAlgorithm::XXHash3.output_size(), 16);
        assert_eq!(HashAlgorithm::XXHash64.output_size(), 8);
        assert_eq!(HashAlgorithm::Blake3.name(), "BLAKE3");
    }

    #[test]
    fn test_algorithm_serde_name() {
        let json = serde_json::to_string(&HashAlgorithm::XXHash3).unwrap();
        assert_eq!(json, "\"xxhash3\"");
        let parsed: HashAlgorithm = serde_json::from_str("\"dropbox\"").unwrap();
        assert_eq!(parsed, HashAlgorithm::Dropbox);
    }

    #[test]
    fn test_config_from_cli() {
        let args = CliArgs::parse_from([
            "contenthash",
            "photo.jpg",
            "--algorithm",
            "sha256",
            "--buffer-size",
            "64K",
            "--verify",
            "abcd",
            "-q",
            "--progress",
        ]);
        let config = HashConfig::from_cli(&args).unwrap();
        assert_eq!(config.file, PathBuf::from("photo.jpg"));
        assert_eq!(config.algorithm, HashAlgorithm::Sha256);
        assert_eq!(config.buffer_size, 64 * 1024);
        assert_eq!(config.expected.as_deref(), Some("abcd"));
        assert!(config.quiet);
        assert!(!config.progress);
        assert_eq!(args.log_level(), "error");
    }

    #[test]
    fn test_config_defaults() {
        let args = CliArgs::parse_from(["contenthash", "file.bin", "-vv"]);
        let config = HashConfig::from_cli(&args).unwrap();
        assert_eq!(config.algorithm, HashAlgorithm::Dropbox);
        assert_eq!(config.buffer_size, DEFAULT_BUFFER_SIZE);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(args.log_level(), "debug");
    }

    #[test]
    fn test_config_rejects_bad_input() {
        let args = CliArgs::parse_from(["contenthash"]);
        assert!(HashConfig::from_cli(&args).is_err());

        let args = CliArgs::parse_from(["contenthash", "file.bin", "-b", "0"]);
        assert!(HashConfig::from_cli(&args).is_err());
    }

    #[test]
    fn test_config_rejects_huge_buffer() {
        for size in ["1e30", "64G", "18446744073709551616"] {
            let args = CliArgs::parse_from(["contenthash", "file.bin", "-b", size]);
            let err = HashConfig::from_cli(&args).unwrap_err();
            assert!(err.starts_with("Invalid buffer size"), "{}: {}", size, err);
        }
    }

    #[test]
    fn test_config_default_matches_cli_defaults() {
        let args = CliArgs::parse_from(["contenthash", "file.bin"]);
        let from_cli = HashConfig::from_cli(&args).unwrap();
        let default = HashConfig {
            file: PathBuf::from("file.bin"),
            ..Default::default()
        };
        assert_eq!(from_cli.algorithm, default.algorithm);
        assert_eq!(from_cli.buffer_size, default.buffer_size);
        assert_eq!(from_cli.output_format, default.output_format);
        assert_eq!(from_cli.expected, default.expected);
    }

    #[test]
    fn test_benchmark_subcommand() {
        let args = CliArgs::parse_from(["contenthash", "benchmark", "--size", "1M"]);
        assert!(args.file.is_none());
        assert!(matches!(args.command, Some(Commands::Benchmark { ref size }) if size == "1M"));
    }
}
