// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use super::*;
use crate::{canonical::CanonicalEnums, error::SchemaIssue, schema};

fn resolve(yaml: &str) -> Result<CommandModel, Vec<SchemaIssue>> {
    let descriptors = schema::parse(yaml, "test.yaml").unwrap();
    schema::validate(&descriptors).unwrap();
    let enums = CanonicalEnums::build(&descriptors);
    build(&descriptors, &enums).map_err(|errors| errors.issues().to_vec())
}

fn model(yaml: &str) -> CommandModel {
    resolve(yaml).unwrap()
}

#[test]
fn classification_table() {
    use Classification::*;

    assert_eq!(Classification::classify(true, false, false), Inert);
    assert_eq!(Classification::classify(true, false, true), QueryOnly);
    assert_eq!(Classification::classify(false, true, true), EventWithQuery);
    assert_eq!(Classification::classify(false, true, false), EventOnly);
    assert_eq!(Classification::classify(false, false, true), EventOnly);
    assert_eq!(Classification::classify(false, false, false), EventOnly);
}

#[test]
fn event_with_query_has_two_handlers() {
    let model = model(
        r#"
- command: ":SOURce:PWM:PHase<n>:DUTY"
  has_query: true
  indices: [{ name: n, range: "1-3" }]
  params: [{ name: duty, type: float, min: 0, max: 1 }]
"#
    );
    let command = &model.commands[0];
    assert_eq!(command.ident, "SOURCE_PWM_PHASEN_DUTY");
    assert_eq!(command.classification, Classification::EventWithQuery);
    assert_eq!(
        command.indices,
        vec![ResolvedIndex {
            name: "n".to_owned(),
            min:  1,
            max:  3
        }]
    );

    let [event, query] = command.handlers.as_slice() else {
        panic!("expected two handlers");
    };
    assert_eq!(event.form, HandlerForm::Event);
    assert_eq!(event.wire_pattern, ":SOURce:PWM:PHase#:DUTY");
    assert_eq!(event.hook, "source_pwm_phasen_duty");
    assert_eq!(event.function, "handler_source_pwm_phasen_duty");
    assert_eq!(event.variant, "SourcePwmPhasenDuty");
    assert_eq!(query.form, HandlerForm::Query);
    assert_eq!(query.wire_pattern, ":SOURce:PWM:PHase#:DUTY?");
    assert_eq!(query.hook, "source_pwm_phasen_duty_query");
    assert_eq!(query.variant, "SourcePwmPhasenDutyQuery");
    assert_eq!(
        command.params[0].ty,
        ParamType::Float(NumericBounds {
            min: Some(0.0),
            max: Some(1.0)
        })
    );
}

#[test]
fn query_only_handler_keeps_plain_names() {
    let model = model("- command: MEAS:VOLT?\n  params: [{ name: value, type: float }]\n");
    let handler = &model.commands[0].handlers[0];
    assert_eq!(model.commands[0].classification, Classification::QueryOnly);
    assert_eq!(handler.form, HandlerForm::Query);
    assert_eq!(handler.wire_pattern, "MEAS:VOLT?");
    assert_eq!(handler.hook, "meas_volt");
    assert_eq!(handler.function, "handler_meas_volt");
}

#[test]
fn inert_and_parameterless_commands() {
    let model = model(
        r#"
- command: "*IDN?"
- command: "*RST"
  has_query: true
"#
    );
    assert_eq!(model.commands[0].classification, Classification::Inert);
    assert!(model.commands[0].handlers.is_empty());
    assert_eq!(model.commands[1].classification, Classification::EventOnly);
    assert_eq!(model.commands[1].handlers.len(), 1);
    assert_eq!(model.handlers().count(), 1);
}

#[test]
fn planned_commands_get_stubs() {
    let model = model(
        r#"
- command: ":CH<n>:ON"
  status: planned
  indices: [{ name: n, range: "1-4" }]
- command: ":CH<n>:OFF"
  status: done
  indices: [{ name: n, range: "1-4" }]
"#
    );
    let planned = &model.commands[0];
    assert!(planned.status.is_planned());
    assert_eq!(
        planned.handlers[0].planned_stub.as_deref(),
        Some("planned_chn_on")
    );

    let done = &model.commands[1];
    assert_eq!(done.status, Status::Other("done".to_owned()));
    assert_eq!(done.handlers[0].planned_stub, None);
}

#[test]
fn enum_params_resolve_to_canonical_group() {
    let model = model(
        r#"
- command: ":SOURce:PWM:MODE"
  params: [{ name: mode, type: enum, values: [OFF, ONEPH] }]
- command: ":SOURce:PWM:SAFE:MODE"
  params: [{ name: mode, type: enum, values: [OFF, ONEPH] }]
"#
    );
    let references: Vec<_> = model.enum_params().map(|(_, reference)| reference).collect();
    assert_eq!(references.len(), 2);
    assert_eq!(references[1].local, "SOURCE_PWM_SAFE_MODE_MODE");
    assert_eq!(references[1].canonical, "SOURCE_PWM_MODE_MODE");
    assert_eq!(references[1].type_name, "SourcePwmModeMode");
    assert_eq!(references[1].choice_table, "MODE_CHOICES");
}

#[test]
fn defaults_render_as_text() {
    let model = model(
        r#"
- command: ":LEVel"
  params:
    - { name: level, type: float, default: 0.5 }
    - { name: on, type: bool, default: true }
    - { name: label, type: string, default: idle }
    - { name: count, type: int }
"#
    );
    let defaults: Vec<_> = model.commands[0]
        .params
        .iter()
        .map(|param| param.default.as_deref())
        .collect();
    assert_eq!(defaults, [Some("0.5"), Some("true"), Some("idle"), None]);
}

#[test]
fn identifier_collisions_are_fatal() {
    let issues = resolve(
        r#"
- command: ":SOURce:A"
- command: "SOURCE-A"
"#
    )
    .unwrap_err();
    assert!(!issues.is_empty());
    assert!(issues.iter().all(|issue| matches!(
        issue,
        SchemaIssue::IdentifierCollision { command, previous, .. }
            if command == "SOURCE-A" && previous == ":SOURce:A"
    )));
}

#[test]
fn event_and_query_only_forms_collide() {
    let issues = resolve(
        r#"
- command: ":LEVel"
  params: [{ name: level, type: int }]
- command: ":LEVel?"
  params: [{ name: level, type: int }]
"#
    )
    .unwrap_err();
    assert!(matches!(
        &issues[0],
        SchemaIssue::IdentifierCollision { symbol, .. } if symbol == "handler_level"
    ));
}

#[test]
fn shared_choice_table_needs_one_group() {
    let issues = resolve(
        r#"
- command: ":A"
  params: [{ name: mode, type: enum, values: [OFF, ON] }]
- command: ":B"
  params: [{ name: mode, type: enum, values: [ON, OFF] }]
"#
    )
    .unwrap_err();
    assert_eq!(
        issues,
        vec![SchemaIssue::ChoiceTableConflict {
            command:  ":B".to_owned(),
            table:    "MODE_CHOICES".to_owned(),
            previous: ":A".to_owned()
        }]
    );
}
