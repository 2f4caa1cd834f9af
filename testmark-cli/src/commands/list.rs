// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `testmark list` command - List builtin workloads.

use testmark_core::BuiltinWorkload;

pub async fn execute() -> anyhow::Result<()> {
    println!("╔════════════╦═══════════════════╦══════════════════════════════════════════════════════╗");
    println!("║ Name       ║ Label             ║ Work per iteration                                   ║");
    println!("╠════════════╬═══════════════════╬══════════════════════════════════════════════════════╣");

    for workload in BuiltinWorkload::ALL {
        println!(
            "║ {:<10} ║ {:<17} ║ {:<52} ║",
            workload.as_str(),
            workload.label(),
            workload.description()
        );
    }

    println!("╚════════════╩═══════════════════╩══════════════════════════════════════════════════════╝");
    println!();
    println!("Total: {} workload(s)", BuiltinWorkload::ALL.len());

    Ok(())
}
