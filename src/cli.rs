//! CLI argument parsing for Invertir

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::runner::{DEFAULT_DATA_SIZE, DEFAULT_ITERATIONS, DEFAULT_WORKSPACE_DIR};

/// Output format for the benchmark report
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "invertir")]
#[command(version)]
#[command(about = "Bitwise-inversion disk write throughput micro-benchmark", long_about = None)]
pub struct Cli {
    /// Size of the random source buffer in bytes
    #[arg(long = "size-bytes", value_name = "BYTES", default_value_t = DEFAULT_DATA_SIZE)]
    pub size_bytes: usize,

    /// Number of invert-and-write iterations
    #[arg(
        short = 'n',
        long = "iterations",
        value_name = "COUNT",
        default_value_t = DEFAULT_ITERATIONS
    )]
    pub iterations: u64,

    /// Workspace directory for the benchmark output files (removed at end of run)
    #[arg(long = "dir", value_name = "PATH", default_value = DEFAULT_WORKSPACE_DIR)]
    pub dir: PathBuf,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging to stderr
    #[arg(long)]
    pub debug: bool,
}
