// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Rendered artifacts and atomic file output.
//!
//! Every artifact is rendered completely in memory before anything is
//! written. Each file is then written to a temporary file in the target
//! directory and renamed over the destination, so a reader never sees a
//! truncated artifact.

use std::{
    io::Write,
    path::{Path, PathBuf}
};

use tempfile::NamedTempFile;

use crate::{
    config::GeneratorConfig,
    error::{Error, Result}
};

/// Independently regenerated sets of files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactGroup {
    /// The Markdown reference.
    Documentation,
    /// Declarations and definitions, always written together.
    Code
}

impl ArtifactGroup {
    /// Both groups.
    pub const ALL: [Self; 2] = [Self::Documentation, Self::Code];

    /// File names of the group.
    pub fn files(self, config: &GeneratorConfig) -> Vec<&str> {
        match self {
            Self::Documentation => vec![config.docs_file.as_str()],
            Self::Code => vec![config.decl_file.as_str(), config.defs_file.as_str()]
        }
    }
}

/// The three rendered artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// Markdown reference.
    pub documentation: String,
    /// Rust declarations.
    pub declarations:  String,
    /// Rust definitions.
    pub definitions:   String
}

impl Artifacts {
    /// Write the files of `group` into `dir`, returning the written paths.
    pub fn write_group(
        &self,
        group: ArtifactGroup,
        dir: &Path,
        config: &GeneratorConfig
    ) -> Result<Vec<PathBuf>> {
        let files: Vec<(&str, &str)> = match group {
            ArtifactGroup::Documentation => {
                vec![(config.docs_file.as_str(), self.documentation.as_str())]
            }
            ArtifactGroup::Code => vec![
                (config.decl_file.as_str(), self.declarations.as_str()),
                (config.defs_file.as_str(), self.definitions.as_str())
            ]
        };

        files
            .into_iter()
            .map(|(name, contents)| {
                let path = dir.join(name);
                write_atomic(&path, contents)?;
                tracing::info!(path = %path.display(), "artifact written");
                Ok(path)
            })
            .collect()
    }
}

/// Replace `path` with `contents` in one rename.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let persist_error = |source| Error::Persist {
        path: path.to_owned(),
        source
    };
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut file = NamedTempFile::new_in(dir).map_err(persist_error)?;
    file.write_all(contents.as_bytes()).map_err(persist_error)?;
    file.flush().map_err(persist_error)?;
    file.persist(path)
        .map_err(|error| persist_error(error.error))?;
    Ok(())
}
