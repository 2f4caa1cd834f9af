// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Aggregate result of a run.

use std::fmt;
use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::humanize::human_ns;

/// Immutable summary produced once per run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunResult {
    /// Sum of every worker's final iteration count.
    pub total_iterations: u64,
    /// Wall-clock time of the whole run, not the sum of worker times.
    #[serde(rename = "elapsed_ns", serialize_with = "serialize_nanos")]
    pub elapsed: Duration,
    /// `total_iterations / elapsed` in seconds, or 0.0 when elapsed is zero.
    pub iters_per_sec: f64,
}

impl RunResult {
    /// Build a result, deriving throughput.
    pub fn new(total_iterations: u64, elapsed: Duration) -> Self {
        let secs = elapsed.as_secs_f64();
        let iters_per_sec = if secs > 0.0 {
            total_iterations as f64 / secs
        } else {
            0.0
        };

        Self {
            total_iterations,
            elapsed,
            iters_per_sec,
        }
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elapsed_ns = i64::try_from(self.elapsed.as_nanos()).unwrap_or(i64::MAX);
        write!(
            f,
            "{} ops in {} ({:.2} ops/sec)",
            self.total_iterations,
            human_ns(elapsed_ns),
            self.iters_per_sec
        )
    }
}

fn serialize_nanos<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
}
