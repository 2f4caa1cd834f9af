// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Benchmark runner.
//!
//! Spawns one OS thread per configured worker, waits for all of them, and
//! sums their final iteration counts into a [`RunResult`].
//!
//! Ordering: the configuration is normalized before any worker starts, and
//! the total is read only after every worker has been joined.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::thread;
use std::time::Instant;

use crate::config::Config;
use crate::error::{MarkError, MarkResult};
use crate::recover::panic_message;
use crate::result::RunResult;
use crate::worker::Worker;
use crate::workload::{FnWorkload, Workload};

/// Shared aggregation point for per-worker counts.
#[derive(Debug, Default)]
pub struct Accumulator {
    total: AtomicU64,
    reports: AtomicUsize,
}

impl Accumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one worker's final count.
    pub fn add(&self, iterations: u64) {
        self.total.fetch_add(iterations, Ordering::Relaxed);
        self.reports.fetch_add(1, Ordering::Relaxed);
    }

    /// Sum of all reported counts.
    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    /// Number of reports received.
    pub fn reports(&self) -> usize {
        self.reports.load(Ordering::Relaxed)
    }
}

/// Runs workloads against one normalized configuration.
#[derive(Debug, Clone)]
pub struct Runner {
    config: Config,
}

impl Runner {
    /// Create a runner, normalizing `config`.
    pub fn new(config: Config) -> Self {
        Self {
            config: config.normalize(),
        }
    }

    /// The normalized configuration every worker reads.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run a plain closure on every worker until the stop condition holds.
    pub fn run<F>(&self, f: F) -> MarkResult<RunResult>
    where
        F: Fn() + Sync,
    {
        self.run_workload(&FnWorkload::new(f))
    }

    /// Run a workload on every worker and aggregate the result.
    ///
    /// If any worker panics, the remaining workers still run to completion
    /// and are joined before the panic is returned as
    /// [`MarkError::WorkloadPanicked`].
    pub fn run_workload<W>(&self, workload: &W) -> MarkResult<RunResult>
    where
        W: Workload + ?Sized,
    {
        self.run_into(workload, &Accumulator::new())
    }

    /// Run `workload`, reporting every worker's count into `accumulator`.
    pub(crate) fn run_into<W>(
        &self,
        workload: &W,
        accumulator: &Accumulator,
    ) -> MarkResult<RunResult>
    where
        W: Workload + ?Sized,
    {
        let config = &self.config;
        let report = |iterations: u64| accumulator.add(iterations);

        tracing::info!(
            workload = workload.name(),
            mode = %config.mode(),
            concurrency = config.concurrency,
            "Starting run"
        );

        let start = Instant::now();
        let failure = thread::scope(|scope| {
            let mut handles = Vec::with_capacity(config.concurrency);
            let mut failure = None;

            for index in 0..config.concurrency {
                let worker = Worker::new(index, config, start).with_report(&report);
                let spawned = thread::Builder::new()
                    .name(format!("testmark-worker-{}", index))
                    .spawn_scoped(scope, move || workload.run(worker));

                match spawned {
                    Ok(handle) => handles.push(handle),
                    Err(e) => {
                        tracing::error!(worker = index, error = %e, "Failed to spawn worker");
                        failure = Some(MarkError::Io {
                            context: "spawning worker thread",
                            source: e,
                        });
                        break;
                    }
                }
            }

            for (index, handle) in handles.into_iter().enumerate() {
                match handle.join() {
                    Ok(iterations) => {
                        tracing::debug!(worker = index, iterations, "Worker finished");
                    }
                    Err(payload) => {
                        let message = panic_message(payload.as_ref());
                        tracing::error!(worker = index, %message, "Worker panicked");
                        if failure.is_none() {
                            failure = Some(MarkError::WorkloadPanicked {
                                worker: index,
                                message,
                            });
                        }
                    }
                }
            }

            failure
        });
        let elapsed = start.elapsed();

        if let Some(err) = failure {
            return Err(err);
        }

        if accumulator.reports() != config.concurrency {
            tracing::warn!(
                expected = config.concurrency,
                received = accumulator.reports(),
                "Some workers did not report a count"
            );
        }

        let result = RunResult::new(accumulator.total(), elapsed);
        tracing::info!(
            workload = workload.name(),
            total_iterations = result.total_iterations,
            elapsed_ms = elapsed.as_millis() as u64,
            iters_per_sec = result.iters_per_sec,
            "Run complete"
        );

        Ok(result)
    }
}

/// Normalize `config` and run `f` on every worker.
pub fn run<F>(config: &Config, f: F) -> MarkResult<RunResult>
where
    F: Fn() + Sync,
{
    Runner::new(*config).run(f)
}
