// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Lightweight single-threaded measurer.
//!
//! Runs a function a fixed number of times and reports total and per-call
//! time, allocated bytes and allocation count. Memory figures require
//! [`CountingAllocator`](crate::alloc::CountingAllocator) to be installed.

use std::time::Instant;

use crate::alloc::{allocated_bytes, allocation_count};

/// Default number of runs per measured function.
pub const DEFAULT_RUNS: u64 = 1000;

/// Totals and per-operation averages of one measurement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BenchResult {
    /// Total time across all runs in nanoseconds.
    pub time_ns: i64,
    /// Total bytes allocated across all runs.
    pub bytes: i64,
    /// Average time per run in nanoseconds.
    pub ns_per_op: i64,
    /// Average bytes allocated per run.
    pub bytes_per_op: i64,
    /// Total allocations across all runs.
    pub allocs: i64,
    /// Average allocations per run.
    pub allocs_per_op: i64,
}

impl BenchResult {
    /// Percentage change in time per operation from `self` to `target`.
    /// Positive when the target is slower. Zero when `self` has no time.
    pub fn delta_ns_pct(&self, target: &BenchResult) -> f64 {
        delta_pct(self.ns_per_op, target.ns_per_op)
    }

    /// Percentage change in bytes per operation from `self` to `target`.
    /// Positive when the target allocates more. Zero when `self` allocates nothing.
    pub fn delta_bytes_pct(&self, target: &BenchResult) -> f64 {
        delta_pct(self.bytes_per_op, target.bytes_per_op)
    }
}

fn delta_pct(reference: i64, target: i64) -> f64 {
    if reference == 0 {
        return 0.0;
    }
    (target - reference) as f64 / reference as f64 * 100.0
}

/// Repeated-call measurer.
#[derive(Debug, Clone)]
pub struct Bench {
    runs_per_case: u64,
}

impl Bench {
    /// Create a measurer with [`DEFAULT_RUNS`] runs per case.
    pub fn new() -> Self {
        Self {
            runs_per_case: DEFAULT_RUNS,
        }
    }

    /// Set the number of runs per case. Zero is treated as one.
    pub fn runs(mut self, runs: u64) -> Self {
        self.runs_per_case = runs.max(1);
        self
    }

    /// Number of runs per case.
    pub fn runs_per_case(&self) -> u64 {
        self.runs_per_case
    }

    /// Run `f` repeatedly and collect timing and allocation totals.
    ///
    /// Each run is timed separately so the allocation counter reads stay
    /// outside the timed window.
    pub fn measure<F>(&self, mut f: F) -> BenchResult
    where
        F: FnMut(),
    {
        let mut total_ns: i64 = 0;
        let mut total_bytes: i64 = 0;
        let mut total_allocs: i64 = 0;

        for _ in 0..self.runs_per_case {
            let bytes_before = allocated_bytes();
            let allocs_before = allocation_count();
            let start = Instant::now();
            f();
            let elapsed = start.elapsed();
            let allocs_after = allocation_count();
            let bytes_after = allocated_bytes();

            total_ns =
                total_ns.saturating_add(i64::try_from(elapsed.as_nanos()).unwrap_or(i64::MAX));
            total_bytes = total_bytes
                .saturating_add(i64::try_from(bytes_after - bytes_before).unwrap_or(i64::MAX));
            total_allocs = total_allocs
                .saturating_add(i64::try_from(allocs_after - allocs_before).unwrap_or(i64::MAX));
        }

        let runs = self.runs_per_case as i64;
        BenchResult {
            time_ns: total_ns,
            bytes: total_bytes,
            ns_per_op: total_ns / runs,
            bytes_per_op: total_bytes / runs,
            allocs: total_allocs,
            allocs_per_op: total_allocs / runs,
        }
    }
}

impl Default for Bench {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hint::black_box;

    fn sum_to(n: u64) -> u64 {
        (0..black_box(n)).fold(0, |acc, i| black_box(acc + i))
    }

    #[test]
    fn test_measure_basic() {
        let bench = Bench::new().runs(2000);
        let fast = bench.measure(|| {
            black_box(sum_to(1_000));
        });
        let slow = bench.measure(|| {
            black_box(sum_to(100_000));
        });

        assert!(fast.time_ns > 0 && slow.time_ns > 0);
        assert!(slow.time_ns > fast.time_ns, "slow should take longer than fast");
        // No counting allocator is installed in unit tests.
        assert_eq!(fast.allocs, 0);
        assert_eq!(fast.bytes, 0);
    }

    #[test]
    fn test_delta() {
        let reference = BenchResult {
            ns_per_op: 1000,
            bytes_per_op: 100,
            ..Default::default()
        };
        let target = BenchResult {
            ns_per_op: 2000,
            bytes_per_op: 300,
            ..Default::default()
        };

        assert_eq!(reference.delta_ns_pct(&target), 100.0);
        assert_eq!(reference.delta_bytes_pct(&target), 200.0);
        assert_eq!(target.delta_ns_pct(&reference), -50.0);
    }

    #[test]
    fn test_delta_zero_reference() {
        let zero = BenchResult::default();
        let target = BenchResult {
            ns_per_op: 10,
            bytes_per_op: 10,
            ..Default::default()
        };
        assert_eq!(zero.delta_ns_pct(&target), 0.0);
        assert_eq!(zero.delta_bytes_pct(&target), 0.0);
    }

    #[test]
    fn test_zero_runs_clamped() {
        let bench = Bench::new().runs(0);
        assert_eq!(bench.runs_per_case(), 1);
        let mut calls = 0;
        bench.measure(|| calls += 1);
        assert_eq!(calls, 1);
    }
}
