// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Run configuration and YAML loading.
//!
//! Configuration values are never rejected: a zero in any field means "unset"
//! and [`Config::normalize`] substitutes a safe default. Only file handling
//! (missing file, malformed YAML, unknown workload) produces errors.

use std::path::Path;
use std::time::{Duration, Instant};

use serde::Deserialize;

use crate::error::{MarkError, MarkResult};
use crate::stop::StopMode;
use crate::workload::BuiltinWorkload;

/// Duration substituted when neither a duration nor an iteration count is set.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(1);

/// Parameters of a single benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// Wall-clock bound. Takes precedence over `iterations` when non-zero.
    pub duration: Duration,
    /// Per-worker iteration bound, used only when `duration` is zero.
    pub iterations: u64,
    /// Number of parallel workers.
    pub concurrency: usize,
}

impl Config {
    /// Create an empty configuration. Normalizes to one worker for one second.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wall-clock bound.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the per-worker iteration bound.
    pub fn iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the number of parallel workers.
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Return a copy with defaults applied. Idempotent.
    pub fn normalize(&self) -> Self {
        let mut cfg = *self;
        if cfg.duration.is_zero() && cfg.iterations == 0 {
            cfg.duration = DEFAULT_DURATION;
        }
        if cfg.concurrency == 0 {
            cfg.concurrency = 1;
        }
        cfg
    }

    /// Returns true if the run is bounded by wall-clock time.
    pub fn uses_duration(&self) -> bool {
        !self.duration.is_zero()
    }

    /// Returns true if the run is bounded by a per-worker iteration count.
    pub fn uses_iterations(&self) -> bool {
        self.iterations > 0 && self.duration.is_zero()
    }

    /// The active termination mode.
    pub fn mode(&self) -> StopMode {
        if self.uses_duration() {
            StopMode::Duration(self.duration)
        } else if self.uses_iterations() {
            StopMode::Iterations(self.iterations)
        } else {
            StopMode::Unbounded
        }
    }

    /// Tells a worker whether to stop, given the shared run start and its
    /// own iteration count.
    pub fn should_stop(&self, start: Instant, iterations: u64) -> bool {
        self.mode().should_stop(start.elapsed(), iterations)
    }
}

/// Raw configuration as parsed from YAML (before defaulting).
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    duration_ms: u64,
    #[serde(default)]
    iterations: u64,
    #[serde(default)]
    concurrency: usize,
    #[serde(default)]
    workload: Option<String>,
}

/// Configuration file contents: run parameters plus an optional workload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub config: Config,
    pub workload: Option<BuiltinWorkload>,
}

/// Configuration loader for YAML run files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file.
    pub fn load_file(path: impl AsRef<Path>) -> MarkResult<RunConfig> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(MarkError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| MarkError::Io {
            context: "reading config file",
            source: e,
        })?;

        Self::load_string(&content)
    }

    /// Load configuration from a YAML string.
    pub fn load_string(content: &str) -> MarkResult<RunConfig> {
        // An empty document deserializes as unit, not as a map.
        let raw: RawConfig = if content.trim().is_empty() {
            RawConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| MarkError::ConfigParse {
                message: format!("YAML parse error: {}", e),
            })?
        };

        let workload = raw
            .workload
            .as_deref()
            .map(str::parse::<BuiltinWorkload>)
            .transpose()?;

        Ok(RunConfig {
            config: Config {
                duration: Duration::from_millis(raw.duration_ms),
                iterations: raw.iterations,
                concurrency: raw.concurrency,
            },
            workload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let cfg = Config::new().normalize();
        assert_eq!(cfg.duration, Duration::from_secs(1));
        assert_eq!(cfg.iterations, 0);
        assert_eq!(cfg.concurrency, 1);
        assert_eq!(cfg.mode(), StopMode::Duration(DEFAULT_DURATION));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let configs = [
            Config::new(),
            Config::new().iterations(50),
            Config::new().duration(Duration::from_millis(5)).concurrency(8),
            Config::new().duration(Duration::from_millis(5)).iterations(3),
        ];
        for cfg in configs {
            let once = cfg.normalize();
            assert_eq!(once.normalize(), once);
        }
    }

    #[test]
    fn test_normalize_does_not_mutate_input() {
        let cfg = Config::new();
        let _ = cfg.normalize();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_iterations_keep_zero_duration() {
        let cfg = Config::new().iterations(10).normalize();
        assert!(cfg.duration.is_zero());
        assert_eq!(cfg.mode(), StopMode::Iterations(10));
    }

    #[test]
    fn test_duration_takes_precedence() {
        let cfg = Config::new()
            .duration(Duration::from_millis(20))
            .iterations(10)
            .normalize();
        assert!(cfg.uses_duration());
        assert!(!cfg.uses_iterations());
        assert_eq!(cfg.mode(), StopMode::Duration(Duration::from_millis(20)));
    }

    #[test]
    fn test_unnormalized_is_unbounded() {
        assert_eq!(Config::new().mode(), StopMode::Unbounded);
        assert!(!Config::new().should_stop(Instant::now(), u64::MAX));
    }

    #[test]
    fn test_should_stop_on_iterations() {
        let cfg = Config::new().iterations(3).normalize();
        let start = Instant::now();
        assert!(!cfg.should_stop(start, 2));
        assert!(cfg.should_stop(start, 3));
    }

    #[test]
    fn test_load_string() {
        let yaml = r#"
duration_ms: 250
concurrency: 4
workload: sha
"#;
        let run = ConfigLoader::load_string(yaml).unwrap();
        assert_eq!(run.config.duration, Duration::from_millis(250));
        assert_eq!(run.config.concurrency, 4);
        assert_eq!(run.workload, Some(BuiltinWorkload::Sha));
    }

    #[test]
    fn test_load_empty_string() {
        let run = ConfigLoader::load_string("").unwrap();
        assert_eq!(run.config, Config::default());
        assert!(run.workload.is_none());
    }

    #[test]
    fn test_zero_values_are_not_rejected() {
        let yaml = "duration_ms: 0\niterations: 0\nconcurrency: 0\n";
        let run = ConfigLoader::load_string(yaml).unwrap();
        assert_eq!(run.config.normalize().duration, DEFAULT_DURATION);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = ConfigLoader::load_string("goroutines: 4\n");
        assert!(matches!(result, Err(MarkError::ConfigParse { .. })));
    }

    #[test]
    fn test_duration_only_in_milliseconds() {
        let result = ConfigLoader::load_string("duration:\n  secs: 1\n  nanos: 0\n");
        assert!(matches!(result, Err(MarkError::ConfigParse { .. })));

        let run = ConfigLoader::load_string("duration_ms: 1500\n").unwrap();
        assert_eq!(run.config.duration, Duration::from_millis(1500));
    }

    #[test]
    fn test_unknown_workload_rejected() {
        let result = ConfigLoader::load_string("workload: quantum\n");
        assert!(matches!(result, Err(MarkError::UnknownWorkload { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = ConfigLoader::load_file("/nonexistent/testmark.yaml");
        assert!(matches!(result, Err(MarkError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("run.yaml");
        std::fs::write(&path, "iterations: 7\nworkload: alu\n").unwrap();

        let run = ConfigLoader::load_file(&path).unwrap();
        assert_eq!(run.config.iterations, 7);
        assert_eq!(run.workload, Some(BuiltinWorkload::Alu));
    }
}
