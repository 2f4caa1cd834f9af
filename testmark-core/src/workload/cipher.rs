// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Authenticated encryption workload using ChaCha20-Poly1305.

use std::hint::black_box;

use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Key, Nonce,
};
use rand::Rng;

use super::Workload;
use crate::worker::Worker;

/// Encryption: seals a zeroed plaintext with a random key and nonce.
///
/// The same nonce is reused on every iteration. That is only acceptable
/// because the ciphertext is discarded.
#[derive(Debug, Clone, Copy)]
pub struct CipherWorkload {
    /// Plaintext bytes sealed per iteration.
    pub plaintext_len: usize,
}

impl Default for CipherWorkload {
    fn default() -> Self {
        Self {
            plaintext_len: 1 << 16,
        }
    }
}

impl Workload for CipherWorkload {
    fn name(&self) -> &str {
        "cipher"
    }

    fn run(&self, worker: Worker<'_>) -> u64 {
        let mut rng = rand::rng();
        let key: [u8; 32] = rng.random();
        let nonce: [u8; 12] = rng.random();
        let plaintext = vec![0u8; self.plaintext_len];

        let cipher = ChaCha20Poly1305::new(Key::from_slice(&key));
        let nonce = Nonce::from_slice(&nonce);

        worker.drive(|| {
            // Sealing in memory cannot fail for buffers of this size.
            let sealed = cipher.encrypt(nonce, plaintext.as_slice());
            black_box(sealed.ok());
        })
    }
}
