// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

use std::hint::black_box;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Workload;
use crate::worker::Worker;

/// Distance between written bytes, one cache line.
const STRIDE: usize = 64;

/// Memory bandwidth: writes a random byte to every cache line of a buffer.
///
/// Each worker owns its buffer and seeds its RNG with its worker index, so
/// runs are repeatable per worker.
#[derive(Debug, Clone, Copy)]
pub struct MemWorkload {
    /// Buffer size per worker in bytes.
    pub buffer_len: usize,
}

impl Default for MemWorkload {
    fn default() -> Self {
        Self {
            buffer_len: 16 << 20,
        }
    }
}

pub(crate) fn scribble(buf: &mut [u8], rng: &mut impl Rng) {
    for j in (0..buf.len()).step_by(STRIDE) {
        buf[j] = rng.random();
    }
}

impl Workload for MemWorkload {
    fn name(&self) -> &str {
        "mem"
    }

    fn run(&self, worker: Worker<'_>) -> u64 {
        let mut rng = StdRng::seed_from_u64(worker.index() as u64);
        let mut buf = vec![0u8; self.buffer_len];
        let count = worker.drive(|| scribble(&mut buf, &mut rng));
        black_box(&buf);
        count
    }
}
