// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Resolved command model consumed by the emitters.

use serde_yaml::Number;

/// Which handlers a command produces.
///
/// | Pattern | `has_query` | Params | Classification |
/// |---------|-------------|--------|----------------|
/// | ends in `?` | - | none | [`Inert`](Self::Inert) |
/// | ends in `?` | - | some | [`QueryOnly`](Self::QueryOnly) |
/// | plain | `true` | some | [`EventWithQuery`](Self::EventWithQuery) |
/// | plain | otherwise | - | [`EventOnly`](Self::EventOnly) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Documented only; no handler, hook or table entry.
    Inert,
    /// One query handler reporting every parameter.
    QueryOnly,
    /// One event handler.
    EventOnly,
    /// An event handler plus a query handler on `pattern?`.
    EventWithQuery
}

impl Classification {
    /// Classify a command.
    pub fn classify(query_only: bool, has_query: bool, has_params: bool) -> Self {
        match (query_only, has_params) {
            (true, false) => Self::Inert,
            (true, true) => Self::QueryOnly,
            (false, true) if has_query => Self::EventWithQuery,
            (false, _) => Self::EventOnly
        }
    }

    /// Whether the documentation lists `pattern?` next to the pattern.
    pub fn lists_query_form(self) -> bool {
        self == Self::EventWithQuery
    }
}

/// Implementation status of a command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    /// No status given.
    #[default]
    Unspecified,
    /// `planned`: hooks get a stub reporting an execution error.
    Planned,
    /// Any other status, documented verbatim.
    Other(String)
}

impl Status {
    /// Parse the status column of a descriptor.
    pub fn parse(status: Option<&str>) -> Self {
        match status.map(str::trim) {
            None | Some("") => Self::Unspecified,
            Some("planned") => Self::Planned,
            Some(other) => Self::Other(other.to_owned())
        }
    }

    /// Whether hooks of the command get a stub implementation.
    pub fn is_planned(&self) -> bool {
        matches!(self, Self::Planned)
    }

    /// Text of the documentation status column.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Unspecified => None,
            Self::Planned => Some("planned"),
            Self::Other(status) => Some(status.as_str())
        }
    }
}

/// Direction of a dispatch handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerForm {
    /// Parses parameters and passes them to the hook by value.
    Event,
    /// Lets the hook fill parameters and writes them to the response.
    Query
}

/// Generated names of one dispatch handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerSpec {
    /// Event or query.
    pub form:         HandlerForm,
    /// Wire pattern of the table entry.
    pub wire_pattern: String,
    /// Method of the hooks trait.
    pub hook:         String,
    /// Handler function.
    pub function:     String,
    /// Variant of the handler enum.
    pub variant:      String,
    /// Stub function backing the hook's default body, for planned commands.
    pub planned_stub: Option<String>
}

/// Optional inclusive bounds converted to the parameter's Rust type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericBounds<T> {
    /// Lower bound.
    pub min: Option<T>,
    /// Upper bound.
    pub max: Option<T>
}

/// Enum parameter resolved to its canonical group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumRef {
    /// Local enum name (`<IDENT>_<PARAM>`).
    pub local:        String,
    /// Canonical local name of the group.
    pub canonical:    String,
    /// Rust type of the group.
    pub type_name:    String,
    /// Choice table of the parameter name.
    pub choice_table: String,
    /// Mnemonics of the group.
    pub values:       Vec<String>
}

/// Rust-side type of a parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamType {
    /// `i32`.
    Int(NumericBounds<i32>),
    /// `u32`.
    Uint(NumericBounds<u32>),
    /// `f32`.
    Float(NumericBounds<f32>),
    /// `bool`.
    Bool,
    /// `String`.
    Text,
    /// Generated enum type.
    Enum(EnumRef)
}

/// A resolved parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedParam {
    /// Declared name.
    pub name:    String,
    /// Local binding in generated handlers.
    pub binding: String,
    /// Rust-side type.
    pub ty:      ParamType,
    /// Declared lower bound, as written.
    pub min:     Option<Number>,
    /// Declared upper bound, as written.
    pub max:     Option<Number>,
    /// Documented default.
    pub default: Option<String>
}

/// A resolved index suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIndex {
    /// Placeholder name.
    pub name: String,
    /// Smallest accepted suffix.
    pub min:  u32,
    /// Largest accepted suffix.
    pub max:  u32
}

/// A command ready for emission.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCommand {
    /// Pattern as written in the schema.
    pub pattern:        String,
    /// Normalized identifier.
    pub ident:          String,
    /// Which handlers exist.
    pub classification: Classification,
    /// Summary column.
    pub description:    Option<String>,
    /// Details column.
    pub details:        Option<String>,
    /// Implementation status.
    pub status:         Status,
    /// Index suffixes, in order.
    pub indices:        Vec<ResolvedIndex>,
    /// Parameters, in order.
    pub params:         Vec<ResolvedParam>,
    /// Handlers, event form first.
    pub handlers:       Vec<HandlerSpec>
}

/// Every command of the schema, in schema order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandModel {
    /// Resolved commands.
    pub commands: Vec<ResolvedCommand>
}

impl CommandModel {
    /// Every handler with its command, in table order.
    pub fn handlers(&self) -> impl Iterator<Item = (&ResolvedCommand, &HandlerSpec)> {
        self.commands
            .iter()
            .flat_map(|command| command.handlers.iter().map(move |handler| (command, handler)))
    }

    /// Every enum parameter, in schema order.
    pub fn enum_params(&self) -> impl Iterator<Item = (&ResolvedCommand, &EnumRef)> {
        self.commands.iter().flat_map(|command| {
            command.params.iter().filter_map(move |param| match &param.ty {
                ParamType::Enum(reference) => Some((command, reference)),
                _ => None
            })
        })
    }
}
