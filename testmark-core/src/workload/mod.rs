// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Workloads: the units of work the runner measures.
//!
//! A [`Workload`] receives a [`Worker`], sets up whatever per-worker state it
//! needs, and hands its per-iteration operation to [`Worker::drive`]. The
//! builtin sample workloads cover CPU, memory and hashing/encryption work.

mod alu;
mod cipher;
mod fpu;
mod mem;
mod sha;

use std::fmt;
use std::str::FromStr;

use crate::error::{MarkError, MarkResult};
use crate::result::RunResult;
use crate::runner::Runner;
use crate::worker::Worker;

pub use alu::AluWorkload;
pub use cipher::CipherWorkload;
pub use fpu::FpuWorkload;
pub use mem::MemWorkload;
pub use sha::ShaWorkload;

/// A unit of work executed by every worker of a run.
pub trait Workload: Sync {
    /// Short name used in logs and summaries.
    fn name(&self) -> &str;

    /// Run on one worker. Implementations call [`Worker::drive`] and return
    /// its count.
    fn run(&self, worker: Worker<'_>) -> u64;
}

/// Adapter running a plain closure as the per-iteration operation.
pub struct FnWorkload<F> {
    f: F,
}

impl<F> FnWorkload<F>
where
    F: Fn() + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Workload for FnWorkload<F>
where
    F: Fn() + Sync,
{
    fn name(&self) -> &str {
        "closure"
    }

    fn run(&self, worker: Worker<'_>) -> u64 {
        worker.drive(&self.f)
    }
}

/// The sample workloads shipped with testmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinWorkload {
    /// Integer mixing arithmetic.
    Alu,
    /// Floating point series summation.
    Fpu,
    /// Strided writes over a large buffer.
    Mem,
    /// SHA-256 over a 1 MiB buffer.
    Sha,
    /// AEAD encryption of a 64 KiB buffer.
    Cipher,
}

impl BuiltinWorkload {
    /// Every builtin workload, in display order.
    pub const ALL: [BuiltinWorkload; 5] = [
        BuiltinWorkload::Alu,
        BuiltinWorkload::Fpu,
        BuiltinWorkload::Mem,
        BuiltinWorkload::Sha,
        BuiltinWorkload::Cipher,
    ];

    /// Get the workload name as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinWorkload::Alu => "alu",
            BuiltinWorkload::Fpu => "fpu",
            BuiltinWorkload::Mem => "mem",
            BuiltinWorkload::Sha => "sha",
            BuiltinWorkload::Cipher => "cipher",
        }
    }

    /// Label used in human-readable summaries.
    pub fn label(&self) -> &'static str {
        match self {
            BuiltinWorkload::Alu => "INT64",
            BuiltinWorkload::Fpu => "FLOAT64",
            BuiltinWorkload::Mem => "MEMORY",
            BuiltinWorkload::Sha => "SHA256",
            BuiltinWorkload::Cipher => "CHACHA20POLY1305",
        }
    }

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            BuiltinWorkload::Alu => "int64 xor/shift/multiply mixing",
            BuiltinWorkload::Fpu => "Leibniz series for pi, 10000 terms per iteration",
            BuiltinWorkload::Mem => "random writes every 64 bytes over a 16 MiB buffer",
            BuiltinWorkload::Sha => "SHA-256 of a 1 MiB buffer",
            BuiltinWorkload::Cipher => "ChaCha20-Poly1305 seal of a 64 KiB buffer",
        }
    }

    /// Run this workload with `runner`.
    pub fn run(&self, runner: &Runner) -> MarkResult<RunResult> {
        match self {
            BuiltinWorkload::Alu => runner.run_workload(&AluWorkload),
            BuiltinWorkload::Fpu => runner.run_workload(&FpuWorkload::default()),
            BuiltinWorkload::Mem => runner.run_workload(&MemWorkload::default()),
            BuiltinWorkload::Sha => runner.run_workload(&ShaWorkload::default()),
            BuiltinWorkload::Cipher => runner.run_workload(&CipherWorkload::default()),
        }
    }
}

impl fmt::Display for BuiltinWorkload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuiltinWorkload {
    type Err = MarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|w| w.as_str() == name)
            .ok_or_else(|| MarkError::UnknownWorkload {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_parse_names() {
        for w in BuiltinWorkload::ALL {
            assert_eq!(w.as_str().parse::<BuiltinWorkload>().unwrap(), w);
        }
        assert_eq!("SHA".parse::<BuiltinWorkload>().unwrap(), BuiltinWorkload::Sha);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "gpu".parse::<BuiltinWorkload>().unwrap_err();
        assert!(matches!(err, MarkError::UnknownWorkload { name } if name == "gpu"));
    }

    #[test]
    fn test_every_builtin_runs() {
        let runner = Runner::new(Config::new().iterations(2).concurrency(2));
        for w in BuiltinWorkload::ALL {
            let result = w.run(&runner).unwrap();
            assert_eq!(result.total_iterations, 4, "workload {}", w);
        }
    }

    #[test]
    fn test_fn_workload_name() {
        let w = FnWorkload::new(|| {});
        assert_eq!(w.name(), "closure");
    }
}
