// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `testmark run` command - Run a builtin workload.
//!
//! Settings come from an optional YAML file; command-line flags override
//! individual fields. The run itself happens on a blocking task since every
//! worker is a dedicated OS thread.

use std::time::Duration;

use anyhow::Context;

use testmark_core::{BuiltinWorkload, Config, ConfigLoader, RunConfig, Runner};

/// Workload used when neither the file nor the flags name one.
const DEFAULT_WORKLOAD: BuiltinWorkload = BuiltinWorkload::Sha;

/// Command-line values that take precedence over the configuration file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub workload: Option<String>,
    pub duration_ms: Option<u64>,
    pub iterations: Option<u64>,
    pub concurrency: Option<usize>,
}

pub async fn execute(
    config_path: Option<&str>,
    overrides: Overrides,
    json: bool,
) -> anyhow::Result<()> {
    let base = match config_path {
        Some(path) => ConfigLoader::load_file(path)
            .with_context(|| format!("loading run configuration {}", path))?,
        None => RunConfig {
            config: Config::new(),
            workload: None,
        },
    };

    let (config, workload) = resolve(base, overrides)?;
    let runner = Runner::new(config);

    tracing::info!(
        workload = %workload,
        mode = %runner.config().mode(),
        concurrency = runner.config().concurrency,
        "Running workload"
    );

    let result = tokio::task::spawn_blocking(move || workload.run(&runner))
        .await
        .context("benchmark task failed")??;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}: {}", workload.label(), result);
    }

    Ok(())
}

/// Merge flags over file values.
fn resolve(base: RunConfig, overrides: Overrides) -> anyhow::Result<(Config, BuiltinWorkload)> {
    let mut config = base.config;

    if let Some(ms) = overrides.duration_ms {
        config.duration = Duration::from_millis(ms);
    }
    if let Some(iterations) = overrides.iterations {
        config.iterations = iterations;
        // An explicit iteration count on the command line replaces a duration
        // that only came from the file.
        if overrides.duration_ms.is_none() {
            config.duration = Duration::ZERO;
        }
    }
    if let Some(concurrency) = overrides.concurrency {
        config.concurrency = concurrency;
    }

    let workload = match overrides.workload {
        Some(name) => name.parse::<BuiltinWorkload>()?,
        None => base.workload.unwrap_or(DEFAULT_WORKLOAD),
    };

    Ok((config, workload))
}
