// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

use std::hint::black_box;

use super::Workload;
use crate::worker::Worker;

/// Floating point: sums the Leibniz series for pi each iteration.
#[derive(Debug, Clone, Copy)]
pub struct FpuWorkload {
    /// Series terms per iteration.
    pub terms: u32,
}

impl Default for FpuWorkload {
    fn default() -> Self {
        Self { terms: 10_000 }
    }
}

/// Approximate pi from the first `terms` terms of the Leibniz series.
pub(crate) fn leibniz_pi(terms: u32) -> f64 {
    let mut sum = 0.0;
    for k in 0..terms {
        let term = 1.0 / (2.0 * f64::from(k) + 1.0);
        if k % 2 == 1 {
            sum -= term;
        } else {
            sum += term;
        }
    }
    sum * 4.0
}

impl Workload for FpuWorkload {
    fn name(&self) -> &str {
        "fpu"
    }

    fn run(&self, worker: Worker<'_>) -> u64 {
        let terms = self.terms;
        worker.drive(|| {
            black_box(leibniz_pi(black_box(terms)));
        })
    }
}
