//! Benchmark metrics and report rendering

use std::time::Duration;

use serde::{Deserialize, Serialize};

const BYTES_PER_MIB: f64 = 1_048_576.0;
const BITS_PER_GIGABIT: f64 = 1_000_000_000.0;

/// Raw counters collected by one benchmark run
#[derive(Debug, Clone)]
pub struct BenchMetrics {
    /// Wall-clock duration of the invert-and-write loop
    pub elapsed: Duration,
    /// Number of files written
    pub files_written: u64,
    /// Total bytes written across all iterations
    pub total_bytes: u64,
}

impl BenchMetrics {
    /// Bytes written per second; zero when no time elapsed.
    pub fn bytes_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.total_bytes as f64 / secs
    }

    /// Throughput in decimal gigabits per second.
    pub fn gigabits_per_second(&self) -> f64 {
        self.bytes_per_second() * 8.0 / BITS_PER_GIGABIT
    }

    /// Total data processed in MiB.
    pub fn data_processed_mb(&self) -> f64 {
        self.total_bytes as f64 / BYTES_PER_MIB
    }

    /// Render the human-readable report block.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str("Benchmark Results:\n");
        out.push_str(&format!(
            "Total time: {:.2} seconds\n",
            self.elapsed.as_secs_f64()
        ));
        out.push_str(&format!("Files generated: {}\n", self.files_written));
        out.push_str(&format!(
            "Total data processed: {:.2} MB\n",
            self.data_processed_mb()
        ));
        out.push_str(&format!(
            "Performance: {:.2} Gbps",
            self.gigabits_per_second()
        ));
        out
    }
}

/// Machine-readable report for `--format json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    /// Wall-clock duration of the loop in fractional seconds
    pub elapsed_seconds: f64,
    /// Number of files written
    pub files_generated: u64,
    /// Total bytes written across all iterations
    pub total_bytes: u64,
    /// Total data processed in MiB
    pub data_processed_mb: f64,
    /// Throughput in decimal gigabits per second
    pub gigabits_per_second: f64,
}

impl From<&BenchMetrics> for JsonReport {
    fn from(metrics: &BenchMetrics) -> Self {
        Self {
            elapsed_seconds: metrics.elapsed.as_secs_f64(),
            files_generated: metrics.files_written,
            total_bytes: metrics.total_bytes,
            data_processed_mb: metrics.data_processed_mb(),
            gigabits_per_second: metrics.gigabits_per_second(),
        }
    }
}
