// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use quote::ToTokens;
use syn::{Expr, File, ImplItem, Item, ItemFn, ItemTrait, Stmt, TraitItem};

use crate::{Artifacts, GeneratorConfig, compile_str};

const SCHEMA: &str = r#"
- command: ":SOURce:PWM:MODE"
  description: "Modulation mode"
  has_query: true
  params:
    - { name: mode, type: enum, values: [OFF, ONEPH, THREEPH], default: OFF }
- command: ":SOURce:PWM:SAFE:MODE"
  params:
    - { name: mode, type: enum, values: [OFF, ONEPH, THREEPH] }
- command: ":SOURce:PWM:PHase<n>:DUTY"
  description: "Duty cycle of one phase"
  details: "Only in DUTY mode; Clamped to range"
  has_query: true
  indices: [{ name: n, range: "1-3" }]
  params:
    - { name: duty, type: float, min: 0, max: 1, default: 0.5 }
- command: ":CH<n>:ON"
  status: planned
  indices: [{ name: n, range: "1-4" }]
- command: ":SOURce:PWM:STATe?"
  params:
    - { name: state, type: enum, values: [IDLE, RUN] }
    - { name: level, type: int, min: -5 }
- command: "*IDN?"
  description: "Identification"
"#;

fn compile() -> Artifacts {
    compile_str(SCHEMA, &GeneratorConfig::default()).unwrap()
}

fn parse(source: &str) -> File {
    syn::parse_file(source).unwrap()
}

fn item_fn<'a>(file: &'a File, name: &str) -> &'a ItemFn {
    file.items
        .iter()
        .find_map(|item| match item {
            Item::Fn(function) if function.sig.ident == name => Some(function),
            _ => None
        })
        .unwrap_or_else(|| panic!("no fn {name}"))
}

fn hooks_trait(file: &File) -> &ItemTrait {
    file.items
        .iter()
        .find_map(|item| match item {
            Item::Trait(hooks) if hooks.ident == "CommandHooks" => Some(hooks),
            _ => None
        })
        .unwrap()
}

fn enum_names(file: &File) -> Vec<String> {
    file.items
        .iter()
        .filter_map(|item| match item {
            Item::Enum(item) => Some(item.ident.to_string()),
            _ => None
        })
        .collect()
}

fn statements(function: &ItemFn) -> Vec<String> {
    function
        .block
        .stmts
        .iter()
        .map(|stmt| stmt.to_token_stream().to_string())
        .collect()
}

#[test]
fn artifacts_carry_generated_header() {
    let artifacts = compile();
    assert!(artifacts.declarations.starts_with("// @generated by scpi-gen from commands.yaml"));
    assert!(artifacts.definitions.contains("DO NOT EDIT"));
    assert!(artifacts.documentation.starts_with("# SCPI Command Reference\n\n"));
}

#[test]
fn one_enum_type_per_canonical_group() {
    let decl = parse(&compile().declarations);
    assert_eq!(
        enum_names(&decl),
        ["SourcePwmModeMode", "SourcePwmStateState", "Handler"]
    );
    let decl_text = compile().declarations;
    assert!(decl_text.contains("Oneph = 1"));
    assert!(decl_text.contains("const COUNT: usize = 3;"));
}

#[test]
fn hooks_trait_has_required_and_planned_methods() {
    let decl = parse(&compile().declarations);
    let methods: Vec<(String, bool)> = hooks_trait(&decl)
        .items
        .iter()
        .filter_map(|item| match item {
            TraitItem::Fn(method) => {
                Some((method.sig.ident.to_string(), method.default.is_some()))
            }
            _ => None
        })
        .collect();
    assert_eq!(
        methods,
        [
            ("source_pwm_mode".to_owned(), false),
            ("source_pwm_mode_query".to_owned(), false),
            ("source_pwm_safe_mode".to_owned(), false),
            ("source_pwm_phasen_duty".to_owned(), false),
            ("source_pwm_phasen_duty_query".to_owned(), false),
            ("chn_on".to_owned(), true),
            ("source_pwm_state".to_owned(), false)
        ]
    );
}

#[test]
fn alias_parameters_use_the_canonical_type() {
    let decl = parse(&compile().declarations);
    let safe_mode = hooks_trait(&decl)
        .items
        .iter()
        .find_map(|item| match item {
            TraitItem::Fn(method) if method.sig.ident == "source_pwm_safe_mode" => {
                Some(method.sig.to_token_stream().to_string())
            }
            _ => None
        })
        .unwrap();
    assert!(safe_mode.contains("mode : SourcePwmModeMode"));
}

#[test]
fn command_table_rewrites_placeholders() {
    let decl = compile().declarations;
    for pattern in [
        "\":SOURce:PWM:MODE\"",
        "\":SOURce:PWM:MODE?\"",
        "\":SOURce:PWM:PHase#:DUTY\"",
        "\":SOURce:PWM:PHase#:DUTY?\"",
        "\":CH#:ON\"",
        "\":SOURce:PWM:STATe?\""
    ] {
        assert!(decl.contains(pattern), "missing {pattern}");
    }
    assert!(!decl.contains("IDN"));
    assert!(!decl.contains("\":CH#:ON?\""));
}

#[test]
fn choice_tables_are_emitted_once_per_parameter_name() {
    let defs = compile().definitions;
    assert_eq!(defs.matches("static MODE_CHOICES").count(), 1);
    assert_eq!(defs.matches("static STATE_CHOICES").count(), 1);
    assert!(defs.contains("SourcePwmModeMode::Threeph as i32"));
}

#[test]
fn event_handler_runs_stages_in_order() {
    let defs = parse(&compile().definitions);
    let stmts = statements(item_fn(&defs, "handler_source_pwm_phasen_duty"));
    assert_eq!(stmts.len(), 6);
    assert!(stmts[0].starts_with("let indices"));
    assert!(stmts[1].starts_with("let duty : f32"));
    assert!(stmts[2].contains("parse_indices"));
    assert!(stmts[2].contains("IndexRange :: new (1 , 3)"));
    assert!(stmts[3].contains("parse_f32"));
    assert!(stmts[4].contains("hooks . source_pwm_phasen_duty (indices , duty) ?"));
    assert!(stmts[5].contains("Ok (())"));
}

#[test]
fn query_handler_formats_outputs() {
    let defs = parse(&compile().definitions);
    let stmts = statements(item_fn(&defs, "handler_source_pwm_state"));
    assert!(stmts[0].starts_with("let mut state : SourcePwmStateState"));
    assert!(stmts[1].starts_with("let mut level : i32"));
    assert!(stmts[2].contains("hooks . source_pwm_state (& mut state , & mut level)"));
    assert!(stmts[3].contains("write_choice (context , & STATE_CHOICES , state)"));
    assert!(stmts[4].contains("context . result_i32 (level)"));
    assert!(!stmts.iter().any(|stmt| stmt.contains("parse_")));
}

#[test]
fn negative_bounds_are_emitted() {
    let defs = compile().definitions;
    assert!(!defs.contains("parse_i32"));

    let yaml = "- command: \":LEVel\"\n  params: [{ name: level, type: int, min: -5, max: 5 }]\n";
    let defs = compile_str(yaml, &GeneratorConfig::default())
        .unwrap()
        .definitions;
    let defs = parse(&defs);
    let stmts = statements(item_fn(&defs, "handler_level"));
    assert!(stmts[1].contains("Some (- 5)"));
    assert!(stmts[1].contains("Some (5)"));
}

#[test]
fn planned_command_gets_stub() {
    let defs = parse(&compile().definitions);
    let stub = item_fn(&defs, "planned_chn_on");
    let body = stub.block.to_token_stream().to_string();
    assert!(body.contains("EXECUTION_ERROR"));
    assert!(body.contains("let _ = indices ;"));
    assert!(!compile().definitions.contains("let _ = (indices);"));
    assert!(
        defs.items
            .iter()
            .all(|item| !matches!(item, Item::Fn(f) if f.sig.ident == "planned_source_pwm_mode"))
    );
}

#[test]
fn dispatch_covers_every_handler() {
    let defs = parse(&compile().definitions);
    let invoke = defs
        .items
        .iter()
        .find_map(|item| match item {
            Item::Impl(dispatch) => dispatch.items.iter().find_map(|item| match item {
                ImplItem::Fn(invoke) => Some(invoke),
                _ => None
            }),
            _ => None
        })
        .unwrap();
    let Some(Stmt::Expr(Expr::Match(dispatch), None)) = invoke.block.stmts.first() else {
        panic!("invoke is not a single match");
    };
    let targets: Vec<String> = dispatch
        .arms
        .iter()
        .map(|arm| arm.body.to_token_stream().to_string())
        .collect();
    assert_eq!(targets.len(), 7);
    assert!(targets.iter().all(|target| target.contains("handler_")));
    assert!(targets.iter().any(|target| target.contains("handler_source_pwm_phasen_duty_query")));
}

#[test]
fn documentation_rows() {
    let docs = compile().documentation;
    let rows: Vec<_> = docs.lines().skip(4).collect();
    assert_eq!(rows.len(), 6);
    assert_eq!(
        rows[0],
        "| `:SOURce:PWM:MODE`<br>`:SOURce:PWM:MODE?` | `OFF\\|ONEPH\\|THREEPH` | Modulation mode | - | OFF | - |"
    );
    assert_eq!(
        rows[2],
        "| `:SOURce:PWM:PHase<n>:DUTY`<br>`:SOURce:PWM:PHase<n>:DUTY?`<br>n=1-3 | `<duty>` | \
         Duty cycle of one phase | Only in DUTY mode<br>Clamped to range<br>MIN=0, MAX=1 | 0.5 | - |"
    );
    assert_eq!(rows[3], "| `:CH<n>:ON`<br>n=1-4 | - | - | - | - | planned |");
    assert_eq!(
        rows[4],
        "| `:SOURce:PWM:STATe?` | `IDLE\\|RUN, <level>` | - | MIN=-5 | - | - |"
    );
    assert_eq!(rows[5], "| `*IDN?` | - | Identification | - | - | - |");
}

#[test]
fn output_is_deterministic() {
    assert_eq!(compile(), compile());
}

#[test]
fn empty_schema_compiles() {
    let artifacts = compile_str("", &GeneratorConfig::default()).unwrap();
    let decl = parse(&artifacts.declarations);
    assert_eq!(enum_names(&decl), ["Handler"]);
    parse(&artifacts.definitions);
    assert_eq!(artifacts.documentation.lines().count(), 4);
}

#[test]
fn keyword_parameters_become_raw_identifiers() {
    let yaml = "- command: \":SOURce:PWM:MOD\"\n  params: [{ name: mod, type: float }]\n";
    let artifacts = compile_str(yaml, &GeneratorConfig::default()).unwrap();
    assert!(artifacts.declarations.contains("r#mod: f32"));
    parse(&artifacts.definitions);
}

#[test]
fn handler_without_inputs_ignores_context() {
    let yaml = "- command: \":SYSTem:RESet\"\n";
    let artifacts = compile_str(yaml, &GeneratorConfig::default()).unwrap();
    let defs = parse(&artifacts.definitions);
    let handler = item_fn(&defs, "handler_system_reset");
    assert!(handler.sig.to_token_stream().to_string().contains("_context"));
    assert_eq!(statements(handler).len(), 2);
}

#[test]
fn planned_stub_discards_every_input() {
    let yaml = "- command: \":SOURce:PWM:PHase<n>:DEADtime\"\n  status: planned\n  \
                indices: [{ name: n, range: \"1-3\" }]\n  \
                params: [{ name: rise, type: uint }, { name: fall, type: uint }]\n";
    let defs = compile_str(yaml, &GeneratorConfig::default())
        .unwrap()
        .definitions;
    assert!(defs.contains("let _ = (indices, rise, fall);"));

    let yaml = "- command: \":SOURce:PWM:DEADtime\"\n  status: planned\n  \
                params: [{ name: nanoseconds, type: int }]\n";
    let defs = compile_str(yaml, &GeneratorConfig::default())
        .unwrap()
        .definitions;
    assert!(defs.contains("let _ = nanoseconds;"));
    assert!(!defs.contains("(nanoseconds);"));
}

#[test]
fn keyword_mnemonics_get_prefixed_variants() {
    let yaml = "- command: \":ROUTe:CLOCk\"\n  has_query: true\n  \
                params: [{ name: source, type: enum, values: [SELF, EXT] }]\n";
    let artifacts = compile_str(yaml, &GeneratorConfig::default()).unwrap();
    assert!(artifacts.declarations.contains("VSelf = 0"));
    assert!(artifacts.declarations.contains("Ext = 1"));
    assert!(
        artifacts
            .definitions
            .contains("Choice::new(\"SELF\", RouteClockSource::VSelf as i32)")
    );
    parse(&artifacts.definitions);
}
