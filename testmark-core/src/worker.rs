// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Worker loop.
//!
//! A worker repeatedly runs one operation, counts it, and consults the stop
//! policy after each execution. Its final count is reported once, after the
//! loop has exited.

use std::time::Instant;

use crate::config::Config;

/// Callback receiving a worker's final iteration count.
pub type ReportFn<'a> = &'a (dyn Fn(u64) + Sync);

/// One worker's view of a run.
///
/// The configuration and start timestamp are shared read-only with every
/// other worker. [`Worker::drive`] consumes the worker, so the report
/// callback fires at most once.
pub struct Worker<'a> {
    index: usize,
    config: &'a Config,
    start: Instant,
    report: Option<ReportFn<'a>>,
}

impl<'a> Worker<'a> {
    /// Create a worker bound to a normalized configuration.
    pub fn new(index: usize, config: &'a Config, start: Instant) -> Self {
        Self {
            index,
            config,
            start,
            report: None,
        }
    }

    /// Attach the callback that receives the final count.
    pub fn with_report(mut self, report: ReportFn<'a>) -> Self {
        self.report = Some(report);
        self
    }

    /// Index of this worker within the run, starting at zero.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The shared run configuration.
    pub fn config(&self) -> &'a Config {
        self.config
    }

    /// The shared run start timestamp.
    pub fn start(&self) -> Instant {
        self.start
    }

    /// Run `op` until the stop policy says otherwise, then report and return
    /// the number of completed iterations.
    ///
    /// The operation always runs at least once. A panic inside `op` unwinds
    /// out of this call without reporting.
    pub fn drive<F>(self, mut op: F) -> u64
    where
        F: FnMut(),
    {
        let mode = self.config.mode();
        let mut iterations = 0u64;

        loop {
            op();
            iterations += 1;
            if mode.should_stop(self.start.elapsed(), iterations) {
                break;
            }
        }

        if let Some(report) = self.report {
            report(iterations);
        }

        iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
    use std::time::Duration;

    #[test]
    fn test_drive_iterations() {
        let cfg = Config::new().iterations(25).normalize();
        let mut calls = 0;
        let count = Worker::new(0, &cfg, Instant::now()).drive(|| calls += 1);
        assert_eq!(count, 25);
        assert_eq!(calls, 25);
    }

    #[test]
    fn test_drive_duration() {
        let cfg = Config::new().duration(Duration::from_millis(20)).normalize();
        let start = Instant::now();
        let count = Worker::new(0, &cfg, start).drive(|| {});
        assert!(count > 0);
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_runs_at_least_once_when_already_expired() {
        let cfg = Config::new().duration(Duration::from_nanos(1)).normalize();
        let start = Instant::now()
            .checked_sub(Duration::from_secs(1))
            .unwrap_or_else(Instant::now);
        let count = Worker::new(0, &cfg, start).drive(|| {});
        assert_eq!(count, 1);
    }

    #[test]
    fn test_report_called_once_with_final_count() {
        let cfg = Config::new().iterations(7).normalize();
        let calls = AtomicUsize::new(0);
        let reported = AtomicU64::new(0);
        let report = |n: u64| {
            calls.fetch_add(1, Ordering::SeqCst);
            reported.store(n, Ordering::SeqCst);
        };

        let count = Worker::new(2, &cfg, Instant::now())
            .with_report(&report)
            .drive(|| {});

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(reported.load(Ordering::SeqCst), count);
    }

    #[test]
    fn test_accessors() {
        let cfg = Config::new().iterations(1).normalize();
        let start = Instant::now();
        let worker = Worker::new(4, &cfg, start);
        assert_eq!(worker.index(), 4);
        assert_eq!(worker.start(), start);
        assert_eq!(worker.config().iterations, 1);
    }
}
