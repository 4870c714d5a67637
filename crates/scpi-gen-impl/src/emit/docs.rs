// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Markdown reference table, one row per command.

use std::fmt::Write;

use crate::{
    config::GeneratorConfig,
    model::{CommandModel, ParamType, ResolvedCommand}
};

const HEADER: &str = "| Command | Parameters | Description | Details | Default | Status |";
const RULE: &str = "|---|---|---|---|---|---|";
const EMPTY: &str = "-";

/// Render the documentation artifact.
pub fn generate(model: &CommandModel, config: &GeneratorConfig) -> String {
    let mut out = format!("# {}\n\n{HEADER}\n{RULE}\n", config.title);
    for command in &model.commands {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} | {} | {} |",
            command_cell(command),
            params_cell(command),
            text_or_empty(command.description.as_deref()),
            details_cell(command),
            defaults_cell(command),
            text_or_empty(command.status.label())
        );
    }
    out
}

fn text_or_empty(text: Option<&str>) -> &str {
    text.map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(EMPTY)
}

fn command_cell(command: &ResolvedCommand) -> String {
    let mut cell = format!("`{}`", command.pattern);
    if command.classification.lists_query_form() {
        let _ = write!(cell, "<br>`{}?`", command.pattern);
    }
    if !command.indices.is_empty() {
        let ranges: Vec<_> = command
            .indices
            .iter()
            .map(|index| format!("{}={}-{}", index.name, index.min, index.max))
            .collect();
        let _ = write!(cell, "<br>{}", ranges.join(", "));
    }
    cell
}

fn params_cell(command: &ResolvedCommand) -> String {
    if command.params.is_empty() {
        return EMPTY.to_owned();
    }
    let params: Vec<_> = command
        .params
        .iter()
        .map(|param| match &param.ty {
            ParamType::Enum(reference) => reference.values.join("\\|"),
            ParamType::Bool => "<bool>".to_owned(),
            _ => format!("<{}>", param.name)
        })
        .collect();
    format!("`{}`", params.join(", "))
}

fn details_cell(command: &ResolvedCommand) -> String {
    let mut parts = Vec::new();
    if let Some(details) = command.details.as_deref().filter(|text| !text.is_empty()) {
        parts.push(details.replace("; ", "<br>"));
    }
    for param in &command.params {
        if matches!(param.ty, ParamType::Enum(_)) {
            continue;
        }
        let mut ranges = Vec::new();
        if let Some(min) = &param.min {
            ranges.push(format!("MIN={min}"));
        }
        if let Some(max) = &param.max {
            ranges.push(format!("MAX={max}"));
        }
        if !ranges.is_empty() {
            parts.push(ranges.join(", "));
        }
    }
    if parts.is_empty() {
        EMPTY.to_owned()
    } else {
        parts.join("<br>")
    }
}

fn defaults_cell(command: &ResolvedCommand) -> String {
    let defaults: Vec<_> = command
        .params
        .iter()
        .filter_map(|param| param.default.as_deref())
        .collect();
    if defaults.is_empty() {
        EMPTY.to_owned()
    } else {
        defaults.join("; ")
    }
}
