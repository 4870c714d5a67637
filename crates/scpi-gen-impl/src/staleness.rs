// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Decides which artifact groups need regeneration.
//!
//! A group is stale when forced, when any of its files is missing, or when
//! any of them is older than the schema.

use std::{
    io::ErrorKind,
    path::Path,
    time::SystemTime
};

use crate::{
    config::GeneratorConfig,
    error::{Error, Result},
    output::ArtifactGroup
};

/// Groups that must be regenerated, in [`ArtifactGroup::ALL`] order.
pub fn stale_groups(
    input: &Path,
    out_dir: &Path,
    config: &GeneratorConfig,
    force: bool
) -> Result<Vec<ArtifactGroup>> {
    let input_modified = match std::fs::metadata(input) {
        Ok(metadata) => metadata.modified().map_err(|source| Error::Io {
            path: input.to_owned(),
            source
        })?,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            return Err(Error::MissingInput(input.to_owned()));
        }
        Err(source) => {
            return Err(Error::Io {
                path: input.to_owned(),
                source
            });
        }
    };

    Ok(ArtifactGroup::ALL
        .into_iter()
        .filter(|group| {
            force
                || group
                    .files(config)
                    .iter()
                    .any(|file| is_stale(&out_dir.join(file), input_modified))
        })
        .collect())
}

fn is_stale(path: &Path, input_modified: SystemTime) -> bool {
    match std::fs::metadata(path).and_then(|metadata| metadata.modified()) {
        Ok(modified) => modified < input_modified,
        Err(_) => true
    }
}
