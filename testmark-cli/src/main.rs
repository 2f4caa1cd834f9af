// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Testmark CLI
//!
//! Command-line interface for running benchmark workloads and converting
//! benchmark output into human-readable form.

use clap::{Parser, Subcommand};

mod commands;

/// Testmark - micro-benchmarking harness
#[derive(Parser)]
#[command(name = "testmark")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a builtin workload and print its throughput
    Run {
        /// Path to a YAML run configuration
        #[arg(short, long)]
        config: Option<String>,

        /// Workload to run (alu, fpu, mem, sha, cipher)
        #[arg(short, long)]
        workload: Option<String>,

        /// Run for this many milliseconds
        #[arg(short, long)]
        duration_ms: Option<u64>,

        /// Run this many iterations per worker (ignored when a duration is set)
        #[arg(short, long)]
        iterations: Option<u64>,

        /// Number of parallel workers
        #[arg(short = 'n', long)]
        concurrency: Option<usize>,

        /// Use one worker per logical CPU
        #[arg(long, conflicts_with = "concurrency")]
        all_cores: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Append human-readable conversions to benchmark output lines
    Convert {
        /// File to read (stdin if omitted)
        file: Option<String>,
    },

    /// Validate a run configuration file
    Validate {
        /// Path to the configuration file
        file: String,
    },

    /// List builtin workloads
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so converted output on stdout stays clean.
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            config,
            workload,
            duration_ms,
            iterations,
            concurrency,
            all_cores,
            json,
        } => {
            let overrides = commands::run::Overrides {
                workload,
                duration_ms,
                iterations,
                concurrency: if all_cores {
                    Some(num_cpus::get())
                } else {
                    concurrency
                },
            };
            commands::run::execute(config.as_deref(), overrides, json).await
        }
        Commands::Convert { file } => commands::convert::execute(file.as_deref()).await,
        Commands::Validate { file } => commands::validate::execute(&file).await,
        Commands::List => commands::list::execute().await,
    }
}
