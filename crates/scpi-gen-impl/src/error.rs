// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types of the schema compiler.
//!
//! Problems in the schema itself are not reported one at a time: every
//! descriptor is checked and all [`SchemaIssue`]s are collected into one
//! [`SchemaErrors`] value, so a single run shows the whole list.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Result alias used throughout the compiler.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level compiler error.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the schema file failed.
    #[error("failed to read {}", .path.display())]
    Io {
        /// File being read.
        path:   PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error
    },

    /// The schema is not well-formed YAML for the descriptor model.
    #[error("failed to parse schema {origin}")]
    Yaml {
        /// File name or `<memory>`.
        origin: String,
        /// Underlying error.
        #[source]
        source: serde_yaml::Error
    },

    /// The schema parsed but violates one or more rules.
    #[error(transparent)]
    Schema(#[from] SchemaErrors),

    /// A generated artifact failed to parse as Rust source.
    #[error("generated {artifact} are not valid Rust")]
    Render {
        /// Artifact name.
        artifact: &'static str,
        /// Parser error.
        #[source]
        source:   syn::Error
    },

    /// Writing an artifact to disk failed.
    #[error("failed to write {}", .path.display())]
    Persist {
        /// Destination file.
        path:   PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error
    },

    /// The schema file does not exist.
    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf)
}

/// One rule violation found in the schema.
///
/// Every variant names the command pattern it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaIssue {
    /// The normalized identifier of a pattern is empty.
    #[error("`{command}`: pattern has no identifier characters")]
    EmptyIdentifier {
        /// Command pattern.
        command: String
    },

    /// A query-only pattern also sets `has_query`.
    #[error("`{command}`: query-only pattern must not set `has_query`")]
    QueryOnlyWithQueryFlag {
        /// Command pattern.
        command: String
    },

    /// An index range is not of the form `<min>-<max>`.
    #[error("`{command}`: index `{index}` has malformed range `{range}`")]
    InvalidIndexRange {
        /// Command pattern.
        command: String,
        /// Index name.
        index:   String,
        /// Declared range text.
        range:   String
    },

    /// An index range has `min > max`.
    #[error("`{command}`: index `{index}` range {min}-{max} is inverted")]
    InvertedIndexRange {
        /// Command pattern.
        command: String,
        /// Index name.
        index:   String,
        /// Declared minimum.
        min:     u32,
        /// Declared maximum.
        max:     u32
    },

    /// A parameter or index name is not an identifier.
    #[error("`{command}`: `{name}` is not a valid identifier")]
    InvalidName {
        /// Command pattern.
        command: String,
        /// Offending name.
        name:    String
    },

    /// A parameter or index name shadows a handler local.
    #[error("`{command}`: name `{name}` is reserved")]
    ReservedName {
        /// Command pattern.
        command: String,
        /// Offending name.
        name:    String
    },

    /// Two parameters or indices of one command share a binding name.
    #[error("`{command}`: name `{name}` is declared twice")]
    DuplicateParameter {
        /// Command pattern.
        command: String,
        /// Offending name.
        name:    String
    },

    /// `min`/`max` given on a non-numeric parameter.
    #[error("`{command}`: parameter `{param}` is not numeric and cannot have bounds")]
    BoundsOnNonNumeric {
        /// Command pattern.
        command: String,
        /// Parameter name.
        param:   String
    },

    /// A bound does not fit the parameter's Rust type.
    #[error("`{command}`: bound {bound} of parameter `{param}` does not fit `{ty}`")]
    BoundOutOfRange {
        /// Command pattern.
        command: String,
        /// Parameter name.
        param:   String,
        /// Declared bound.
        bound:   String,
        /// Rust type of the parameter.
        ty:      &'static str
    },

    /// `min > max`.
    #[error("`{command}`: parameter `{param}` has min greater than max")]
    InvertedBounds {
        /// Command pattern.
        command: String,
        /// Parameter name.
        param:   String
    },

    /// `values` given on a non-enum parameter.
    #[error("`{command}`: parameter `{param}` is not an enum and cannot have values")]
    ValuesOnNonEnum {
        /// Command pattern.
        command: String,
        /// Parameter name.
        param:   String
    },

    /// Enum parameter without values.
    #[error("`{command}`: enum parameter `{param}` declares no values")]
    MissingEnumValues {
        /// Command pattern.
        command: String,
        /// Parameter name.
        param:   String
    },

    /// A mnemonic appears twice in one enum parameter.
    #[error("`{command}`: enum parameter `{param}` repeats value `{mnemonic}`")]
    DuplicateMnemonic {
        /// Command pattern.
        command:  String,
        /// Parameter name.
        param:    String,
        /// Repeated mnemonic.
        mnemonic: String
    },

    /// Two mnemonics map onto the same Rust variant name, or one maps to none.
    #[error("`{command}`: value `{mnemonic}` of parameter `{param}` has no distinct variant name")]
    VariantCollision {
        /// Command pattern.
        command:  String,
        /// Parameter name.
        param:    String,
        /// Mnemonic without a distinct variant.
        mnemonic: String
    },

    /// Two descriptors generate the same Rust item name.
    #[error("`{command}`: generated name `{symbol}` is already used by `{previous}`")]
    IdentifierCollision {
        /// Command pattern of the later descriptor.
        command:  String,
        /// Colliding generated name.
        symbol:   String,
        /// Command pattern that claimed the name first.
        previous: String
    },

    /// Two enum parameters share a choice table name but not a canonical type.
    #[error(
        "`{command}`: choice table `{table}` is shared with `{previous}` but the value lists differ"
    )]
    ChoiceTableConflict {
        /// Command pattern of the later descriptor.
        command:  String,
        /// Choice table name.
        table:    String,
        /// Command pattern that claimed the table first.
        previous: String
    }
}

impl SchemaIssue {
    /// Command pattern the issue was found in.
    pub fn command(&self) -> &str {
        match self {
            Self::EmptyIdentifier {
                command
            }
            | Self::QueryOnlyWithQueryFlag {
                command
            }
            | Self::InvalidIndexRange {
                command, ..
            }
            | Self::InvertedIndexRange {
                command, ..
            }
            | Self::InvalidName {
                command, ..
            }
            | Self::ReservedName {
                command, ..
            }
            | Self::DuplicateParameter {
                command, ..
            }
            | Self::BoundsOnNonNumeric {
                command, ..
            }
            | Self::BoundOutOfRange {
                command, ..
            }
            | Self::InvertedBounds {
                command, ..
            }
            | Self::ValuesOnNonEnum {
                command, ..
            }
            | Self::MissingEnumValues {
                command, ..
            }
            | Self::DuplicateMnemonic {
                command, ..
            }
            | Self::VariantCollision {
                command, ..
            }
            | Self::IdentifierCollision {
                command, ..
            }
            | Self::ChoiceTableConflict {
                command, ..
            } => command
        }
    }
}

/// Every issue found in one schema, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaErrors(Vec<SchemaIssue>);

impl SchemaErrors {
    /// Empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an issue.
    pub fn push(&mut self, issue: SchemaIssue) {
        self.0.push(issue);
    }

    /// Whether no issue was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Recorded issues.
    pub fn issues(&self) -> &[SchemaIssue] {
        &self.0
    }

    /// `Ok(value)` when nothing was recorded, `Err(self)` otherwise.
    pub fn finish<T>(self, value: T) -> std::result::Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for SchemaErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid command schema ({} issue", self.0.len())?;
        if self.0.len() != 1 {
            f.write_str("s")?;
        }
        f.write_str(")")?;
        for issue in &self.0 {
            write!(f, "\n  - {issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaErrors {}
