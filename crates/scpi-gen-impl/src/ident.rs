// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Identifier normalization and derived names.
//!
//! Every generated symbol descends from the normalized identifier of a
//! command pattern:
//!
//! | Input | Normalized |
//! |-------|------------|
//! | `:SOURce:PWM:PHase<n>:DUTY` | `SOURCE_PWM_PHASEN_DUTY` |
//! | `MEAS:VOLT?` | `MEAS_VOLT` |
//! | `*IDN?` | `IDN` |
//!
//! | Derived name | Example |
//! |--------------|---------|
//! | hook / handler | `source_pwm_phasen_duty`, `handler_source_pwm_phasen_duty_query` |
//! | handler variant | `SourcePwmPhasenDuty`, `SourcePwmPhasenDutyQuery` |
//! | local enum name | `SOURCE_PWM_MODE_MODE` |
//! | enum type | `SourcePwmModeMode` |
//! | choice table | `MODE_CHOICES` |
//!
//! Identifiers are compared as plain strings. Two patterns normalizing to
//! the same identifier are reported as a collision by the model builder.

use convert_case::{Case, Casing};

/// Names a parameter or index must not take: they are the locals of every
/// generated handler, or keywords that cannot be raw identifiers.
pub const RESERVED_NAMES: &[&str] = &["context", "hooks", "indices", "self", "super", "crate"];

/// Normalize a command pattern into its identifier.
///
/// Removes `<`, `>` and `?`, replaces every run of characters outside
/// `[A-Za-z0-9]` with one `_`, trims `_` at both ends and upper-cases the
/// result. May return an empty string.
pub fn normalize(pattern: &str) -> String {
    let mut ident = String::with_capacity(pattern.len());
    let mut pending_separator = false;
    for c in pattern.chars().filter(|c| !matches!(c, '<' | '>' | '?')) {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !ident.is_empty() {
                ident.push('_');
            }
            pending_separator = false;
            ident.push(c.to_ascii_uppercase());
        } else {
            pending_separator = true;
        }
    }
    ident
}

/// Whether the pattern is query-only (last non-blank character is `?`).
pub fn is_query(pattern: &str) -> bool {
    pattern.trim_end().ends_with('?')
}

/// Wire pattern with every `<placeholder>` replaced by `#`.
///
/// An unterminated `<` is kept as written.
pub fn wire_pattern(pattern: &str) -> String {
    let mut wire = String::with_capacity(pattern.len());
    let mut rest = pattern;
    while let Some(open) = rest.find('<') {
        let (head, tail) = rest.split_at(open);
        wire.push_str(head);
        match tail[1..].find('>') {
            Some(close) if close > 0 => {
                wire.push('#');
                rest = &tail[close + 2..];
            }
            _ => {
                wire.push('<');
                rest = &tail[1..];
            }
        }
    }
    wire.push_str(rest);
    wire
}

/// Snake-case form of a normalized identifier.
pub fn snake(ident: &str) -> String {
    ident.to_ascii_lowercase()
}

/// Pascal-case form of a normalized identifier.
pub fn pascal(ident: &str) -> String {
    ident.to_ascii_lowercase().to_case(Case::Pascal)
}

/// Local enum name of parameter `param` of the command `ident`.
pub fn enum_local_name(ident: &str, param: &str) -> String {
    format!("{ident}_{}", normalize(param))
}

/// Choice table name of an enum parameter.
///
/// Depends on the parameter name only, so every enum parameter with the
/// same name shares one table.
pub fn choice_table_name(param: &str) -> String {
    format!("{}_CHOICES", normalize(param))
}

/// Rust variant name of an enum mnemonic.
///
/// `None` when the mnemonic has no alphanumeric character. A name that would
/// start with a digit, or would be the `Self` keyword, is prefixed with `V`.
pub fn variant_name(mnemonic: &str) -> Option<String> {
    let sanitized = normalize(mnemonic);
    if sanitized.is_empty() {
        return None;
    }
    let name = pascal(&sanitized);
    if name == "Self" || name.starts_with(|c: char| c.is_ascii_digit()) {
        Some(format!("V{name}"))
    } else {
        Some(name)
    }
}

/// Whether `name` is an ASCII identifier starting with a letter
/// (`[A-Za-z][A-Za-z0-9_]*`).
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Local binding name of a parameter in the generated handler.
pub fn binding_name(name: &str) -> String {
    name.to_case(Case::Snake)
}

/// Whether a binding name is reserved.
pub fn is_reserved(binding: &str) -> bool {
    RESERVED_NAMES.contains(&binding)
}
