// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Serde model of the YAML schema.

use serde::Deserialize;
use serde_yaml::{Number, Value};

/// One command of the schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommandDescriptor {
    /// SCPI command pattern, e.g. `:SOURce:PWM:PHase<n>:DUTY`.
    pub command:     String,
    /// Human-readable summary.
    #[serde(default)]
    pub description: Option<String>,
    /// Free-text notes; `"; "` renders as a line break.
    #[serde(default)]
    pub details:     Option<String>,
    /// Implementation status; `planned` gets a stub hook.
    #[serde(default)]
    pub status:      Option<String>,
    /// Whether a settable command also has a query form.
    #[serde(default)]
    pub has_query:   bool,
    /// Numeric suffixes of the pattern, in order.
    #[serde(default)]
    pub indices:     Vec<IndexDescriptor>,
    /// Parameters, in order.
    #[serde(default)]
    pub params:      Vec<ParamDescriptor>
}

/// A numeric suffix of a command pattern.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IndexDescriptor {
    /// Placeholder name.
    pub name:  String,
    /// Inclusive range, `"<min>-<max>"`.
    pub range: String
}

impl IndexDescriptor {
    /// Parsed `(min, max)` of the declared range.
    ///
    /// `None` unless the text is two unsigned integers joined by `-`.
    pub fn bounds(&self) -> Option<(u32, u32)> {
        let (min, max) = self.range.split_once('-')?;
        Some((min.trim().parse().ok()?, max.trim().parse().ok()?))
    }
}

/// A parameter of a command.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParamDescriptor {
    /// Parameter name.
    pub name:    String,
    /// Declared kind.
    #[serde(rename = "type")]
    pub kind:    ParamKind,
    /// Inclusive lower bound (numeric kinds only).
    #[serde(default)]
    pub min:     Option<Number>,
    /// Inclusive upper bound (numeric kinds only).
    #[serde(default)]
    pub max:     Option<Number>,
    /// Documented default value.
    #[serde(default)]
    pub default: Option<Value>,
    /// Mnemonics (enum kind only), in declaration order.
    #[serde(default)]
    pub values:  Option<Vec<String>>
}

/// Declared parameter kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    /// Signed integer.
    Int,
    /// Unsigned integer.
    Uint,
    /// Floating point.
    Float,
    /// Boolean.
    #[serde(alias = "boolean")]
    Bool,
    /// One of a fixed list of mnemonics.
    Enum,
    /// Free text.
    String
}

impl ParamKind {
    /// Whether `min`/`max` apply.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Uint | Self::Float)
    }

    /// Rust type the kind maps to; enums map to their generated type.
    pub fn rust_type(self) -> &'static str {
        match self {
            Self::Int => "i32",
            Self::Uint => "u32",
            Self::Float => "f32",
            Self::Bool => "bool",
            Self::Enum => "enum",
            Self::String => "String"
        }
    }
}
