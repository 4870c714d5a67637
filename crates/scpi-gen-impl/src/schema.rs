// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema loading and validation.
//!
//! # Architecture
//!
//! ```text
//! schema.rs (coordinator)
//! ├── descriptor.rs - serde model (CommandDescriptor, IndexDescriptor, ParamDescriptor)
//! └── validate.rs   - per-descriptor rules, accumulated into SchemaErrors
//! ```
//!
//! # Format
//!
//! ```yaml
//! - command: ":SOURce:PWM:PHase<n>:DUTY"
//!   description: "Duty cycle of one phase"
//!   has_query: true
//!   indices: [{ name: n, range: "1-3" }]
//!   params:
//!     - { name: duty, type: float, min: 0, max: 1, default: 0.5 }
//! ```
//!
//! An empty document is an empty schema.

mod descriptor;
mod validate;


use std::path::Path;

pub use descriptor::{CommandDescriptor, IndexDescriptor, ParamDescriptor, ParamKind};
pub use validate::validate;
pub(crate) use validate::{float_bound, int_bound, uint_bound};

use crate::error::{Error, Result};

/// Parse a schema held in memory.
///
/// `origin` names the source in error messages.
pub fn parse(yaml: &str, origin: &str) -> Result<Vec<CommandDescriptor>> {
    if yaml.trim().is_empty() {
        return Ok(Vec::new());
    }
    let descriptors: Option<Vec<CommandDescriptor>> =
        serde_yaml::from_str(yaml).map_err(|source| Error::Yaml {
            origin: origin.to_owned(),
            source
        })?;
    let descriptors = descriptors.unwrap_or_default();
    tracing::debug!(origin, commands = descriptors.len(), "schema parsed");
    Ok(descriptors)
}

/// Read and parse a schema file.
pub fn load(path: &Path) -> Result<Vec<CommandDescriptor>> {
    let yaml = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source
    })?;
    parse(&yaml, &path.display().to_string())
}
