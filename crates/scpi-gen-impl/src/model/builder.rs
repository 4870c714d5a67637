// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Resolution of validated descriptors into the command model.

use std::collections::HashMap;

use serde_yaml::Value;

use super::types::{
    Classification, CommandModel, EnumRef, HandlerForm, HandlerSpec, NumericBounds, ParamType,
    ResolvedCommand, ResolvedIndex, ResolvedParam, Status
};
use crate::{
    canonical::CanonicalEnums,
    error::{SchemaErrors, SchemaIssue},
    ident,
    schema::{self, CommandDescriptor, ParamDescriptor, ParamKind}
};

/// Resolve every descriptor and check names across the whole schema.
///
/// Expects descriptors that passed [`schema::validate`].
pub fn build(
    descriptors: &[CommandDescriptor],
    enums: &CanonicalEnums
) -> Result<CommandModel, SchemaErrors> {
    let mut errors = SchemaErrors::new();
    check_enum_types(enums, &mut errors);

    let mut symbols = Claims::default();
    let mut tables = HashMap::<String, (String, String)>::new();
    let mut commands = Vec::with_capacity(descriptors.len());

    for descriptor in descriptors {
        let command = resolve(descriptor, enums);

        for handler in &command.handlers {
            symbols.claim(&handler.function, &command.pattern, &mut errors);
            symbols.claim(&handler.variant, &command.pattern, &mut errors);
        }

        for param in &command.params {
            let ParamType::Enum(reference) = &param.ty else {
                continue;
            };
            match tables.get(&reference.choice_table) {
                Some((canonical, previous)) if *canonical != reference.canonical => {
                    errors.push(SchemaIssue::ChoiceTableConflict {
                        command:  command.pattern.clone(),
                        table:    reference.choice_table.clone(),
                        previous: previous.clone()
                    });
                }
                Some(_) => {}
                None => {
                    tables.insert(
                        reference.choice_table.clone(),
                        (reference.canonical.clone(), command.pattern.clone())
                    );
                }
            }
        }

        tracing::trace!(
            command = %command.pattern,
            ident = %command.ident,
            classification = ?command.classification,
            "command resolved"
        );
        commands.push(command);
    }

    errors.finish(CommandModel {
        commands
    })
}

/// Generated symbols and the pattern that claimed each one first.
#[derive(Default)]
struct Claims(HashMap<String, String>);

impl Claims {
    fn claim(&mut self, symbol: &str, command: &str, errors: &mut SchemaErrors) {
        match self.0.get(symbol) {
            Some(previous) => errors.push(SchemaIssue::IdentifierCollision {
                command:  command.to_owned(),
                symbol:   symbol.to_owned(),
                previous: previous.clone()
            }),
            None => {
                self.0.insert(symbol.to_owned(), command.to_owned());
            }
        }
    }
}

fn check_enum_types(enums: &CanonicalEnums, errors: &mut SchemaErrors) {
    let mut types = Claims::default();
    for group in enums.groups() {
        types.claim(&ident::pascal(&group.name), &group.command, errors);
    }
}

fn resolve(descriptor: &CommandDescriptor, enums: &CanonicalEnums) -> ResolvedCommand {
    let pattern = descriptor.command.trim();
    let ident = ident::normalize(pattern);
    let query_only = ident::is_query(pattern);
    let classification =
        Classification::classify(query_only, descriptor.has_query, !descriptor.params.is_empty());
    let status = Status::parse(descriptor.status.as_deref());

    let indices = descriptor
        .indices
        .iter()
        .filter_map(|index| {
            index.bounds().map(|(min, max)| ResolvedIndex {
                name: index.name.clone(),
                min,
                max
            })
        })
        .collect();

    let params = descriptor
        .params
        .iter()
        .map(|param| resolve_param(&ident, param, enums))
        .collect();

    let handlers = handlers(pattern, &ident, classification, status.is_planned());

    ResolvedCommand {
        pattern: descriptor.command.clone(),
        ident,
        classification,
        description: descriptor.description.clone(),
        details: descriptor.details.clone(),
        status,
        indices,
        params,
        handlers
    }
}

fn handlers(
    pattern: &str,
    ident: &str,
    classification: Classification,
    planned: bool
) -> Vec<HandlerSpec> {
    let wire = ident::wire_pattern(pattern);
    let snake = ident::snake(ident);
    let pascal = ident::pascal(ident);

    let spec = |form, wire_pattern: String, hook: String, variant: String| HandlerSpec {
        form,
        wire_pattern,
        function: format!("handler_{hook}"),
        planned_stub: planned.then(|| format!("planned_{hook}")),
        hook,
        variant
    };

    match classification {
        Classification::Inert => Vec::new(),
        Classification::QueryOnly => vec![spec(HandlerForm::Query, wire, snake, pascal)],
        Classification::EventOnly => vec![spec(HandlerForm::Event, wire, snake, pascal)],
        Classification::EventWithQuery => vec![
            spec(HandlerForm::Event, wire.clone(), snake.clone(), pascal.clone()),
            spec(
                HandlerForm::Query,
                format!("{wire}?"),
                format!("{snake}_query"),
                format!("{pascal}Query")
            )
        ]
    }
}

fn resolve_param(ident: &str, param: &ParamDescriptor, enums: &CanonicalEnums) -> ResolvedParam {
    let ty = match param.kind {
        ParamKind::Int => ParamType::Int(NumericBounds {
            min: param.min.as_ref().and_then(schema::int_bound),
            max: param.max.as_ref().and_then(schema::int_bound)
        }),
        ParamKind::Uint => ParamType::Uint(NumericBounds {
            min: param.min.as_ref().and_then(schema::uint_bound),
            max: param.max.as_ref().and_then(schema::uint_bound)
        }),
        ParamKind::Float => ParamType::Float(NumericBounds {
            min: param.min.as_ref().and_then(schema::float_bound),
            max: param.max.as_ref().and_then(schema::float_bound)
        }),
        ParamKind::Bool => ParamType::Bool,
        ParamKind::String => ParamType::Text,
        ParamKind::Enum => ParamType::Enum(enum_ref(ident, param, enums))
    };

    ResolvedParam {
        name: param.name.clone(),
        binding: ident::binding_name(&param.name),
        ty,
        min: param.min.clone(),
        max: param.max.clone(),
        default: param.default.as_ref().and_then(render_default)
    }
}

fn enum_ref(ident: &str, param: &ParamDescriptor, enums: &CanonicalEnums) -> EnumRef {
    let local = ident::enum_local_name(ident, &param.name);
    let (canonical, values) = match enums.group_of(&local) {
        Some(group) => (group.name.clone(), group.values.clone()),
        None => (local.clone(), param.values.clone().unwrap_or_default())
    };
    EnumRef {
        type_name: ident::pascal(&canonical),
        choice_table: ident::choice_table_name(&param.name),
        local,
        canonical,
        values
    }
}

fn render_default(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) => Some(text.clone()),
        other => serde_yaml::to_string(other)
            .ok()
            .map(|text| text.trim().to_owned())
    }
}
