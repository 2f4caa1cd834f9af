// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

use std::hint::black_box;

use sha2::{Digest, Sha256};

use super::Workload;
use crate::worker::Worker;

/// Hashing: SHA-256 over a zeroed buffer each iteration.
#[derive(Debug, Clone, Copy)]
pub struct ShaWorkload {
    /// Bytes hashed per iteration.
    pub data_len: usize,
}

impl Default for ShaWorkload {
    fn default() -> Self {
        Self { data_len: 1 << 20 }
    }
}

impl Workload for ShaWorkload {
    fn name(&self) -> &str {
        "sha"
    }

    fn run(&self, worker: Worker<'_>) -> u64 {
        let data = vec![0u8; self.data_len];
        worker.drive(|| {
            black_box(Sha256::digest(black_box(&data)));
        })
    }
}
