// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Pipeline
//!
//! ```text
//! YAML ──► schema::parse ──► schema::validate ──► CanonicalEnums::build
//!                                                        │
//!          Artifacts ◄── emit::{docs, decl, defs} ◄── model::build
//!              │
//!              └──► output (atomic writes of stale groups only)
//! ```
//!
//! | Stage | Module | Failure |
//! |-------|--------|---------|
//! | load | [`schema`] | [`Error::Io`], [`Error::Yaml`] |
//! | validate | [`schema::validate`] | [`Error::Schema`] |
//! | canonicalize | [`canonical`] | - |
//! | resolve | [`model`] | [`Error::Schema`] (name collisions) |
//! | emit | [`emit`] | [`Error::Render`] |
//! | write | [`output`] | [`Error::Persist`] |
//!
//! Nothing is written unless every stage succeeded for every artifact.

pub mod canonical;
pub mod config;
pub mod emit;
pub mod error;
pub mod ident;
pub mod model;
pub mod output;
pub mod schema;
pub mod staleness;

use std::path::{Path, PathBuf};

pub use canonical::CanonicalEnums;
pub use config::GeneratorConfig;
pub use error::{Error, Result, SchemaErrors, SchemaIssue};
pub use output::{ArtifactGroup, Artifacts};
pub use schema::CommandDescriptor;

use crate::emit::RustArtifact;

/// Compile parsed descriptors into the three artifacts.
pub fn compile(descriptors: &[CommandDescriptor], config: &GeneratorConfig) -> Result<Artifacts> {
    schema::validate(descriptors)?;
    let enums = CanonicalEnums::build(descriptors);
    let model = model::build(descriptors, &enums)?;
    tracing::debug!(
        commands = model.commands.len(),
        handlers = model.handlers().count(),
        enum_types = enums.groups().len(),
        "command model resolved"
    );

    let documentation = emit::docs::generate(&model, config);
    let declarations = emit::render(
        emit::decl::generate(&model, &enums),
        RustArtifact::Declarations,
        config
    )?;
    let definitions = emit::render(
        emit::defs::generate(&model),
        RustArtifact::Definitions,
        config
    )?;

    Ok(Artifacts {
        documentation,
        declarations,
        definitions
    })
}

/// Compile a schema held in memory.
pub fn compile_str(yaml: &str, config: &GeneratorConfig) -> Result<Artifacts> {
    let descriptors = schema::parse(yaml, &config.source_name)?;
    compile(&descriptors, config)
}

/// Outcome of [`generate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Files written, in write order.
    pub written: Vec<PathBuf>,
    /// Groups left untouched because they were up to date.
    pub skipped: Vec<ArtifactGroup>
}

/// Regenerate the stale artifacts of `input` into `out_dir`.
///
/// The schema is only read when at least one group is stale. When
/// `config.source_name` is empty the input's file name is recorded in the
/// generated headers.
pub fn generate(
    input: &Path,
    out_dir: &Path,
    config: &GeneratorConfig,
    force: bool
) -> Result<Report> {
    let stale = staleness::stale_groups(input, out_dir, config, force)?;
    let skipped: Vec<_> = ArtifactGroup::ALL
        .into_iter()
        .filter(|group| !stale.contains(group))
        .collect();

    if stale.is_empty() {
        tracing::info!(input = %input.display(), "artifacts up to date");
        return Ok(Report {
            written: Vec::new(),
            skipped
        });
    }

    let mut config = config.clone();
    if config.source_name.is_empty() {
        config.source_name = input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
    }

    let descriptors = schema::load(input)?;
    let artifacts = compile(&descriptors, &config)?;

    let mut written = Vec::new();
    for group in stale {
        written.extend(artifacts.write_group(group, out_dir, &config)?);
    }
    Ok(Report {
        written,
        skipped
    })
}
