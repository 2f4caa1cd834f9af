// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Stop-condition policy.
//!
//! Decides, from elapsed time and a worker's iteration count, whether the
//! worker should stop. The predicate is pure and safe to call from any number
//! of workers sharing the same configuration.

use std::time::Duration;

/// Termination mode derived from a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopMode {
    /// Stop once the run has lasted at least this long.
    Duration(Duration),
    /// Stop once a worker has completed this many iterations.
    Iterations(u64),
    /// Never stop. Only reachable from a configuration that was not normalized.
    Unbounded,
}

impl StopMode {
    /// Returns true when a worker with `iterations` completed, `elapsed` after
    /// the run started, should exit its loop.
    pub fn should_stop(&self, elapsed: Duration, iterations: u64) -> bool {
        match *self {
            StopMode::Duration(limit) => elapsed >= limit,
            StopMode::Iterations(limit) => iterations >= limit,
            StopMode::Unbounded => false,
        }
    }

    /// Get the mode name as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            StopMode::Duration(_) => "duration",
            StopMode::Iterations(_) => "iterations",
            StopMode::Unbounded => "unbounded",
        }
    }
}

impl std::fmt::Display for StopMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopMode::Duration(d) => write!(f, "duration({:?})", d),
            StopMode::Iterations(k) => write!(f, "iterations({})", k),
            StopMode::Unbounded => write!(f, "unbounded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_mode() {
        let mode = StopMode::Duration(Duration::from_millis(100));
        assert!(!mode.should_stop(Duration::from_millis(99), u64::MAX));
        assert!(mode.should_stop(Duration::from_millis(100), 0));
        assert!(mode.should_stop(Duration::from_secs(1), 1));
    }

    #[test]
    fn test_iterations_mode() {
        let mode = StopMode::Iterations(10);
        assert!(!mode.should_stop(Duration::from_secs(3600), 9));
        assert!(mode.should_stop(Duration::ZERO, 10));
        assert!(mode.should_stop(Duration::ZERO, 11));
    }

    #[test]
    fn test_unbounded_never_stops() {
        let mode = StopMode::Unbounded;
        assert!(!mode.should_stop(Duration::from_secs(u64::MAX / 2), u64::MAX));
    }

    #[test]
    fn test_display() {
        assert_eq!(StopMode::Iterations(5).to_string(), "iterations(5)");
        assert_eq!(StopMode::Unbounded.as_str(), "unbounded");
    }
}
