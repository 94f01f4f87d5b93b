//! Benchmark configuration and the timed invert-and-write loop

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;

use crate::invert;
use crate::metrics::BenchMetrics;
use crate::workspace::Workspace;

/// Default size of the random source buffer (1 MiB).
pub const DEFAULT_DATA_SIZE: usize = 1024 * 1024;

/// Default number of invert-and-write iterations.
pub const DEFAULT_ITERATIONS: u64 = 1000;

/// Default workspace directory, relative to the current working directory.
pub const DEFAULT_WORKSPACE_DIR: &str = "benchmark_files";

/// Errors that can abort a benchmark run
///
/// All three are terminal: no retries, remaining iterations are skipped.
/// The workspace is still removed on every one of these paths.
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("failed to create workspace directory {}: {source}", .path.display())]
    Workspace { path: PathBuf, source: io::Error },

    #[error("failed to generate random data: {0}")]
    Entropy(#[from] rand::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Result type for benchmark runs
pub type Result<T> = std::result::Result<T, BenchError>;

/// Benchmark parameters with chainable builder methods
///
/// # Example
/// ```
/// use invertir::runner::BenchConfig;
///
/// let config = BenchConfig::new()
///     .with_data_size(4096)
///     .with_iterations(10)
///     .with_workspace_dir("/tmp/invertir_scratch");
/// assert_eq!(config.data_size, 4096);
/// assert_eq!(config.iterations, 10);
/// ```
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Size of the random source buffer in bytes
    pub data_size: usize,
    /// Number of invert-and-write iterations
    pub iterations: u64,
    /// Directory holding the output files for the duration of the run
    pub workspace_dir: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            data_size: DEFAULT_DATA_SIZE,
            iterations: DEFAULT_ITERATIONS,
            workspace_dir: PathBuf::from(DEFAULT_WORKSPACE_DIR),
        }
    }
}

impl BenchConfig {
    /// Create a configuration with the documented defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source buffer size in bytes
    pub fn with_data_size(mut self, bytes: usize) -> Self {
        self.data_size = bytes;
        self
    }

    /// Set the iteration count
    pub fn with_iterations(mut self, count: u64) -> Self {
        self.iterations = count;
        self
    }

    /// Set the workspace directory
    pub fn with_workspace_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workspace_dir = dir.into();
        self
    }
}

/// Destination for the per-iteration output files.
///
/// The loop writes through this seam so tests can inject write failures and
/// observe exactly which writes were attempted.
pub trait FileSink {
    /// Write the whole buffer to `path`, creating or truncating the file.
    fn write_file(&mut self, path: &Path, data: &[u8]) -> io::Result<()>;
}

/// Production sink backed by the real filesystem
#[derive(Debug, Default)]
pub struct FsSink;

impl FileSink for FsSink {
    fn write_file(&mut self, path: &Path, data: &[u8]) -> io::Result<()> {
        fs::write(path, data)
    }
}

/// Executes the benchmark: workspace setup, buffer generation, the timed
/// loop, and metrics collection. Teardown is owned by the [`Workspace`]
/// guard, so the directory is removed on the error paths too.
#[derive(Debug)]
pub struct BenchRunner {
    config: BenchConfig,
}

impl BenchRunner {
    /// Create a runner for the given configuration
    pub fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    /// The configuration this runner executes
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Run the benchmark against the real filesystem
    pub fn run(&self) -> Result<BenchMetrics> {
        self.run_with_sink(&mut FsSink)
    }

    /// Run the benchmark, writing each inverted buffer through `sink`
    pub fn run_with_sink<S: FileSink>(&self, sink: &mut S) -> Result<BenchMetrics> {
        let workspace =
            Workspace::create(&self.config.workspace_dir).map_err(|source| BenchError::Workspace {
                path: self.config.workspace_dir.clone(),
                source,
            })?;
        tracing::debug!("workspace created at {}", workspace.root().display());

        let data = invert::generate_random_data(self.config.data_size)?;
        tracing::debug!("generated {} bytes of source data", data.len());

        let start = Instant::now();
        let mut total_bytes: u64 = 0;

        for i in 0..self.config.iterations {
            let inverted = invert::invert_buffer(&data);
            let path = workspace.file_path(i);
            sink.write_file(&path, &inverted)
                .map_err(|source| BenchError::Write { path, source })?;
            total_bytes += inverted.len() as u64;
        }

        let elapsed = start.elapsed();
        tracing::debug!(
            "benchmark loop finished: {} files, {} bytes in {:.3}s",
            self.config.iterations,
            total_bytes,
            elapsed.as_secs_f64()
        );

        Ok(BenchMetrics {
            elapsed,
            files_written: self.config.iterations,
            total_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = BenchConfig::new();
        assert_eq!(config.data_size, 1_048_576);
        assert_eq!(config.iterations, 1000);
        assert_eq!(config.workspace_dir, PathBuf::from("benchmark_files"));
    }

    #[test]
    fn test_config_builder_chain() {
        let config = BenchConfig::new()
            .with_data_size(512)
            .with_iterations(7)
            .with_workspace_dir("scratch");
        assert_eq!(config.data_size, 512);
        assert_eq!(config.iterations, 7);
        assert_eq!(config.workspace_dir, PathBuf::from("scratch"));
    }

    #[test]
    fn test_fs_sink_writes_whole_buffer() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("out.bin");
        FsSink.write_file(&path, &[7u8; 128]).unwrap();
        assert_eq!(fs::read(&path).unwrap(), vec![7u8; 128]);
    }

    #[test]
    fn test_run_accounts_every_iteration() {
        let tmp = tempfile::tempdir().unwrap();
        let config = BenchConfig::new()
            .with_data_size(256)
            .with_iterations(4)
            .with_workspace_dir(tmp.path().join("ws"));
        let metrics = BenchRunner::new(config).run().unwrap();
        assert_eq!(metrics.files_written, 4);
        assert_eq!(metrics.total_bytes, 4 * 256);
    }

    #[test]
    fn test_run_removes_workspace_on_success() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("ws");
        let config = BenchConfig::new()
            .with_data_size(64)
            .with_iterations(2)
            .with_workspace_dir(&dir);
        BenchRunner::new(config).run().unwrap();
        assert!(!dir.exists());
    }

    #[test]
    fn test_workspace_creation_failure_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, b"file, not dir").unwrap();
        let config = BenchConfig::new()
            .with_data_size(64)
            .with_iterations(1)
            .with_workspace_dir(blocker.join("ws"));
        let err = BenchRunner::new(config).run().unwrap_err();
        assert!(matches!(err, BenchError::Workspace { .. }));
        assert!(err.to_string().contains("blocker"));
    }
}
