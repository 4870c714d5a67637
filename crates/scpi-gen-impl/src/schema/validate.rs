// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-descriptor schema rules.
//!
//! Rules that involve several descriptors at once (generated name
//! collisions, shared choice tables) are checked by the model builder.

use std::collections::HashSet;

use serde_yaml::Number;

use super::{CommandDescriptor, ParamDescriptor, ParamKind};
use crate::{
    error::{SchemaErrors, SchemaIssue},
    ident
};

/// Check every descriptor, collecting all issues.
pub fn validate(descriptors: &[CommandDescriptor]) -> Result<(), SchemaErrors> {
    let mut errors = SchemaErrors::new();
    for descriptor in descriptors {
        validate_descriptor(descriptor, &mut errors);
    }
    errors.finish(())
}

fn validate_descriptor(descriptor: &CommandDescriptor, errors: &mut SchemaErrors) {
    let command = &descriptor.command;

    let command_ident = ident::normalize(command);
    if command_ident.is_empty() {
        errors.push(SchemaIssue::EmptyIdentifier {
            command: command.clone()
        });
    } else if command_ident.starts_with(|c: char| c.is_ascii_digit()) {
        errors.push(SchemaIssue::InvalidName {
            command: command.clone(),
            name:    command_ident
        });
    } else if matches!(ident::snake(&command_ident).as_str(), "self" | "super" | "crate") {
        // Hook and handler names cannot be raw identifiers.
        errors.push(SchemaIssue::ReservedName {
            command: command.clone(),
            name:    command_ident
        });
    }
    if ident::is_query(command) && descriptor.has_query {
        errors.push(SchemaIssue::QueryOnlyWithQueryFlag {
            command: command.clone()
        });
    }

    let mut bindings = HashSet::new();
    for index in &descriptor.indices {
        check_name(command, &index.name, &mut bindings, errors);
        match index.bounds() {
            None => errors.push(SchemaIssue::InvalidIndexRange {
                command: command.clone(),
                index:   index.name.clone(),
                range:   index.range.clone()
            }),
            Some((min, max)) if min > max => errors.push(SchemaIssue::InvertedIndexRange {
                command: command.clone(),
                index: index.name.clone(),
                min,
                max
            }),
            Some(_) => {}
        }
    }

    for param in &descriptor.params {
        check_name(command, &param.name, &mut bindings, errors);
        check_bounds(command, param, errors);
        check_values(command, param, errors);
    }
}

fn check_name(
    command: &str,
    name: &str,
    bindings: &mut HashSet<String>,
    errors: &mut SchemaErrors
) {
    if !ident::is_identifier(name) {
        errors.push(SchemaIssue::InvalidName {
            command: command.to_owned(),
            name:    name.to_owned()
        });
        return;
    }
    let binding = ident::binding_name(name);
    if ident::is_reserved(&binding) {
        errors.push(SchemaIssue::ReservedName {
            command: command.to_owned(),
            name:    name.to_owned()
        });
    } else if !bindings.insert(binding) {
        errors.push(SchemaIssue::DuplicateParameter {
            command: command.to_owned(),
            name:    name.to_owned()
        });
    }
}

fn check_bounds(command: &str, param: &ParamDescriptor, errors: &mut SchemaErrors) {
    if param.min.is_none() && param.max.is_none() {
        return;
    }
    if !param.kind.is_numeric() {
        errors.push(SchemaIssue::BoundsOnNonNumeric {
            command: command.to_owned(),
            param:   param.name.clone()
        });
        return;
    }

    let mut out_of_range = |bound: &Number| {
        errors.push(SchemaIssue::BoundOutOfRange {
            command: command.to_owned(),
            param:   param.name.clone(),
            bound:   bound.to_string(),
            ty:      param.kind.rust_type()
        });
    };

    let inverted = match param.kind {
        ParamKind::Int => {
            ordered(param.min.as_ref(), param.max.as_ref(), int_bound, &mut out_of_range)
        }
        ParamKind::Uint => {
            ordered(param.min.as_ref(), param.max.as_ref(), uint_bound, &mut out_of_range)
        }
        _ => ordered(param.min.as_ref(), param.max.as_ref(), float_bound, &mut out_of_range)
    };

    if inverted {
        errors.push(SchemaIssue::InvertedBounds {
            command: command.to_owned(),
            param:   param.name.clone()
        });
    }
}

/// Convert both bounds, reporting unconvertible ones; `true` when
/// both converted and `min > max`.
fn ordered<T: PartialOrd>(
    min: Option<&Number>,
    max: Option<&Number>,
    convert: fn(&Number) -> Option<T>,
    out_of_range: &mut impl FnMut(&Number)
) -> bool {
    let mut convert_reporting = |bound: Option<&Number>| {
        bound.and_then(|number| {
            let value = convert(number);
            if value.is_none() {
                out_of_range(number);
            }
            value
        })
    };
    let min = convert_reporting(min);
    let max = convert_reporting(max);
    matches!((min, max), (Some(min), Some(max)) if min > max)
}

fn check_values(command: &str, param: &ParamDescriptor, errors: &mut SchemaErrors) {
    if param.kind != ParamKind::Enum {
        if param.values.is_some() {
            errors.push(SchemaIssue::ValuesOnNonEnum {
                command: command.to_owned(),
                param:   param.name.clone()
            });
        }
        return;
    }

    let values = match param.values.as_deref() {
        Some(values) if !values.is_empty() => values,
        _ => {
            errors.push(SchemaIssue::MissingEnumValues {
                command: command.to_owned(),
                param:   param.name.clone()
            });
            return;
        }
    };

    let mut mnemonics = HashSet::new();
    let mut variants = HashSet::new();
    for value in values {
        if !mnemonics.insert(value.as_str()) {
            errors.push(SchemaIssue::DuplicateMnemonic {
                command:  command.to_owned(),
                param:    param.name.clone(),
                mnemonic: value.clone()
            });
            continue;
        }
        let distinct = ident::variant_name(value).is_some_and(|variant| variants.insert(variant));
        if !distinct {
            errors.push(SchemaIssue::VariantCollision {
                command:  command.to_owned(),
                param:    param.name.clone(),
                mnemonic: value.clone()
            });
        }
    }
}

/// `i32` value of an integral bound.
pub fn int_bound(number: &Number) -> Option<i32> {
    number.as_i64().and_then(|value| i32::try_from(value).ok())
}

/// `u32` value of an integral, non-negative bound.
pub fn uint_bound(number: &Number) -> Option<u32> {
    number.as_u64().and_then(|value| u32::try_from(value).ok())
}

/// `f32` value of a finite bound within `f32` range.
pub fn float_bound(number: &Number) -> Option<f32> {
    number
        .as_f64()
        .filter(|value| value.is_finite() && value.abs() <= f64::from(f32::MAX))
        .map(|value| value as f32)
}
