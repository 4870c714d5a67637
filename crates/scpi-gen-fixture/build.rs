// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::{
    env,
    error::Error,
    path::{Path, PathBuf}
};

use scpi_gen_impl::GeneratorConfig;

const SCHEMA: &str = "schema/commands.yaml";

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed={SCHEMA}");
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let config = GeneratorConfig::default()
        .with_source_name("commands.yaml")
        .with_title("PWM Instrument Commands");

    scpi_gen_impl::generate(Path::new(SCHEMA), &out_dir, &config, true)?;
    Ok(())
}
