// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `testmark validate` command - Validate a run configuration file.

use testmark_core::{human_ns, ConfigLoader};

pub async fn execute(file: &str) -> anyhow::Result<()> {
    tracing::info!(file = %file, "Validating configuration");

    match ConfigLoader::load_file(file) {
        Ok(run_config) => {
            let config = run_config.config.normalize();
            println!("✓ Configuration is valid");
            println!();
            println!("Run Settings (after defaults):");
            println!("  Stop Mode:    {}", config.mode().as_str());
            println!(
                "  Duration:     {}",
                human_ns(i64::try_from(config.duration.as_nanos()).unwrap_or(i64::MAX))
            );
            println!("  Iterations:   {}", config.iterations);
            println!("  Concurrency:  {}", config.concurrency);
            println!(
                "  Workload:     {}",
                run_config
                    .workload
                    .map(|w| w.as_str())
                    .unwrap_or("(none)")
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("✗ Configuration validation failed:");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}
