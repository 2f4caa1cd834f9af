// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Testmark Core Library
//!
//! Micro-benchmarking harness: runs a unit of work repeatedly, for a fixed
//! duration or a fixed iteration count, across any number of parallel
//! workers, and reports aggregate throughput. Also provides human-readable
//! formatting of durations and byte counts, conversion of benchmark report
//! lines, and a lightweight single-threaded measurer.

pub mod alloc;
pub mod bench;
pub mod config;
pub mod error;
pub mod humanize;
pub mod recover;
pub mod report_line;
pub mod result;
pub mod runner;
pub mod stop;
pub mod worker;
pub mod workload;

// Re-export commonly used types
pub use alloc::CountingAllocator;
pub use bench::{Bench, BenchResult};
pub use config::{Config, ConfigLoader, RunConfig, DEFAULT_DURATION};
pub use error::{MarkError, MarkResult};
pub use humanize::{human_bytes, human_ns};
pub use report_line::{append_converted_line, BenchLine, Metric};
pub use result::RunResult;
pub use runner::{run, Accumulator, Runner};
pub use stop::StopMode;
pub use worker::Worker;
pub use workload::{BuiltinWorkload, Workload};
