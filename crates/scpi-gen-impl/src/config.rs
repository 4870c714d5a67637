// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generator configuration.
//!
//! | Field | Default |
//! |-------|---------|
//! | `title` | `SCPI Command Reference` |
//! | `source_name` | `commands.yaml` |
//! | `docs_file` | `SCPI_COMMANDS.md` |
//! | `decl_file` | `scpi_commands_decl.rs` |
//! | `defs_file` | `scpi_commands_defs.rs` |

/// Default documentation title.
pub const DEFAULT_TITLE: &str = "SCPI Command Reference";

/// Default documentation file name.
pub const DEFAULT_DOCS_FILE: &str = "SCPI_COMMANDS.md";

/// Default declaration file name.
pub const DEFAULT_DECL_FILE: &str = "scpi_commands_decl.rs";

/// Default definition file name.
pub const DEFAULT_DEFS_FILE: &str = "scpi_commands_defs.rs";

/// Settings shared by every emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Heading of the documentation table.
    pub title:       String,
    /// Input name recorded in the `@generated` header.
    pub source_name: String,
    /// File name of the documentation artifact.
    pub docs_file:   String,
    /// File name of the declaration artifact.
    pub decl_file:   String,
    /// File name of the definition artifact.
    pub defs_file:   String
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            title:       DEFAULT_TITLE.to_owned(),
            source_name: "commands.yaml".to_owned(),
            docs_file:   DEFAULT_DOCS_FILE.to_owned(),
            decl_file:   DEFAULT_DECL_FILE.to_owned(),
            defs_file:   DEFAULT_DEFS_FILE.to_owned()
        }
    }
}

impl GeneratorConfig {
    /// Replace the recorded input name.
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }

    /// Replace the documentation title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
