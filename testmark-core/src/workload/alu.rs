// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

use std::hint::black_box;

use super::Workload;
use crate::worker::Worker;

/// Integer arithmetic: xor/shift/multiply mixing of a 64-bit accumulator.
#[derive(Debug, Default, Clone, Copy)]
pub struct AluWorkload;

impl Workload for AluWorkload {
    fn name(&self) -> &str {
        "alu"
    }

    fn run(&self, worker: Worker<'_>) -> u64 {
        let mut x: i64 = 1;
        worker.drive(|| {
            x ^= x.wrapping_shl(1).wrapping_add(x >> 3);
            x = x.wrapping_mul(3);
            black_box(x);
        })
    }
}
