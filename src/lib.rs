//! Invertir - bitwise-inversion disk write throughput micro-benchmark
//!
//! This library provides the core functionality for the benchmark: OS-random
//! buffer generation, the byte-wise complement transform, a scoped workspace
//! directory that never outlives the run, and the timed invert-and-write loop
//! with its derived throughput metrics.

pub mod cli;
pub mod invert;
pub mod metrics;
pub mod runner;
pub mod workspace;
