// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Custom error types for testmark.
//!
//! All errors are explicit enum variants. The library never returns
//! `Box<dyn Error>` or `anyhow::Result`; the CLI adds context at its edge.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the benchmarking harness.
#[derive(Debug, Error)]
pub enum MarkError {
    // =========================================================================
    // Configuration Errors - only raised while loading files
    // =========================================================================
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("Unknown workload: {name}")]
    UnknownWorkload { name: String },

    // =========================================================================
    // Run Errors
    // =========================================================================
    #[error("Workload panicked on worker {worker}: {message}")]
    WorkloadPanicked { worker: usize, message: String },

    // =========================================================================
    // System Errors
    // =========================================================================
    #[error("IO error: {context} - {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using MarkError.
pub type MarkResult<T> = Result<T, MarkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workload_panicked_display() {
        let err = MarkError::WorkloadPanicked {
            worker: 3,
            message: "boom".to_string(),
        };
        assert!(err.to_string().contains("worker 3"));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let err = MarkError::Io {
            context: "spawning worker thread",
            source: std::io::Error::other("no threads left"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("spawning worker thread"));
    }
}
