// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Artifact emitters.
//!
//! # Architecture
//!
//! ```text
//! emit.rs (coordinator, rendering)
//! ├── docs.rs   - Markdown reference table
//! ├── decl.rs   - enum types, CommandHooks, Handler, COMMANDS
//! ├── defs.rs   - choice tables, planned stubs, handlers, Dispatch impl
//! └── tokens.rs - shared identifier, type and literal helpers
//! ```
//!
//! The Rust emitters return `proc_macro2::TokenStream`s, which are then:
//! - validated with `syn::parse2` as a whole file;
//! - formatted with `prettyplease`;
//! - prefixed with an `@generated` header.
//!
//! Both Rust artifacts are meant to be `include!`d into the same module.

pub mod decl;
pub mod defs;
pub mod docs;
mod tokens;

#[cfg(test)]
mod tests;

use proc_macro2::TokenStream;

use crate::{
    config::GeneratorConfig,
    error::{Error, Result}
};

/// Which Rust artifact is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RustArtifact {
    /// Types, hooks trait, handler enum and command table.
    Declarations,
    /// Choice tables, stubs, handlers and dispatch.
    Definitions
}

impl RustArtifact {
    /// Name used in headers and errors.
    pub fn name(self) -> &'static str {
        match self {
            Self::Declarations => "declarations",
            Self::Definitions => "definitions"
        }
    }

    fn companion<'a>(self, config: &'a GeneratorConfig) -> &'a str {
        match self {
            Self::Declarations => &config.defs_file,
            Self::Definitions => &config.decl_file
        }
    }
}

/// Validate, format and stamp a generated Rust artifact.
pub fn render(
    tokens: TokenStream,
    artifact: RustArtifact,
    config: &GeneratorConfig
) -> Result<String> {
    let file = syn::parse2::<syn::File>(tokens).map_err(|source| Error::Render {
        artifact: artifact.name(),
        source
    })?;
    let body = prettyplease::unparse(&file);
    tracing::debug!(artifact = artifact.name(), bytes = body.len(), "artifact rendered");

    Ok(format!(
        "// @generated by scpi-gen from {}: {}.\n\
         // DO NOT EDIT. Regenerate from the schema instead.\n\
         // Include together with `{}` in one module.\n\n{body}",
        config.source_name,
        artifact.name(),
        artifact.companion(config)
    ))
}
