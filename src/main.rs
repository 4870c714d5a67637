// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::process::ExitCode;

use clap::Parser;
use scpi_gen::cli::{Cli, describe};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let out_dir = cli.out_dir();
    match scpi_gen::generate(&cli.input, &out_dir, &cli.config(), cli.force) {
        Ok(report) => {
            tracing::debug!(
                written = report.written.len(),
                skipped = report.skipped.len(),
                "generation finished"
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!("{}", describe(error));
            ExitCode::FAILURE
        }
    }
}
