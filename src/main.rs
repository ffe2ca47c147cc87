//! ContentHash CLI - content-addressable file hashing
//!
//! Prints the Dropbox content hash (or another algorithm's digest) of a file.

use clap::Parser;
use contenthash::config::{parse_bounded_size, CliArgs, Commands, HashConfig, MAX_BENCHMARK_SIZE};
use contenthash::error::{HashError, Result};
use contenthash::hash::{benchmark_algorithms, hash_with_config};
use contenthash::progress::ProgressReporter;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse CLI arguments
    let args = CliArgs::parse();

    // Initialize logging; RUST_LOG overrides -v/-q
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Handle result
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<()> {
    // Handle subcommands
    if let Some(command) = &args.command {
        return handle_command(command);
    }

    if args.file.is_none() {
        eprintln!("Usage: contenthash <FILE> [OPTIONS]");
        eprintln!("       contenthash --help for more information");
        eprintln!("       contenthash benchmark - Measure algorithm throughput");
        std::process::exit(1);
    }

    let config = HashConfig::from_cli(&args).map_err(HashError::ConfigError)?;
    cmd_hash(&config)
}

fn handle_command(command: &Commands) -> Result<()> {
    match command {
        Commands::Benchmark { size } => cmd_benchmark(size),
    }
}

fn cmd_hash(config: &HashConfig) -> Result<()> {
    info!(
        file = %config.file.display(),
        algorithm = config.algorithm.name(),
        buffer = %humansize::format_size(config.buffer_size as u64, humansize::BINARY),
        "Starting"
    );

    let mut progress = if config.progress {
        ProgressReporter::new()
    } else {
        ProgressReporter::disabled()
    };

    let report = hash_with_config(config, &mut progress)?;

    if !config.quiet {
        println!("{}", report.render(config.output_format)?);
    }

    report.ensure_matches()
}

fn cmd_benchmark(size: &str) -> Result<()> {
    let size_bytes = parse_bounded_size(size, MAX_BENCHMARK_SIZE)
        .map_err(|e| HashError::config(format!("Invalid benchmark size: {}", e)))?;

    println!("=== Hash Algorithm Benchmark ===");
    println!("Data size: {}\n", humansize::format_size(size_bytes as u64, humansize::BINARY));

    let results = benchmark_algorithms(size_bytes);
    for (algo, duration, throughput) in results {
        println!("{:12} {:>10.2?}  {:>8.1} MB/s", algo.name(), duration, throughput);
    }

    Ok(())
}
