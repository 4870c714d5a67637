// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Enum canonicalization.
//!
//! Enum parameters with identical ordered mnemonic lists share one generated
//! type. The first parameter to introduce a list, in schema order, names the
//! group; every later one is recorded as an alias of it.
//!
//! ```text
//! :SOURce:PWM:MODE        mode  [OFF, ONEPH]  -> SOURCE_PWM_MODE_MODE (canonical)
//! :SOURce:PWM:SAFE:MODE   mode  [OFF, ONEPH]  -> alias of SOURCE_PWM_MODE_MODE
//! :SOURce:PWM:ALIGN       align [ONEPH, OFF]  -> SOURCE_PWM_ALIGN_ALIGN (order matters)
//! ```
//!
//! Two passes run:
//!
//! 1. Every command that emits an event form, in schema order.
//! 2. Query-only commands. Their lists resolve to an existing group when the
//!    tuple was already seen; unseen tuples open new groups after all groups
//!    of the first pass, so event-form names never depend on them.

use std::collections::{BTreeMap, HashMap};

use crate::{
    ident,
    schema::{CommandDescriptor, ParamKind}
};

/// One generated enum type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumGroup {
    /// Local enum name of the first member; names the generated type.
    pub name:    String,
    /// Mnemonics in declaration order.
    pub values:  Vec<String>,
    /// Pattern of the command that introduced the group.
    pub command: String,
    /// Parameter that introduced the group.
    pub param:   String
}

/// Canonical groups and the local-to-canonical map.
#[derive(Debug, Clone, Default)]
pub struct CanonicalEnums {
    groups:  Vec<EnumGroup>,
    by_list: HashMap<Vec<String>, usize>,
    members: HashMap<String, usize>,
    aliases: BTreeMap<String, String>
}

impl CanonicalEnums {
    /// Canonicalize every enum parameter of the schema.
    ///
    /// Expects a validated schema.
    pub fn build(descriptors: &[CommandDescriptor]) -> Self {
        let mut enums = Self::default();
        let (queries, events): (Vec<_>, Vec<_>) = descriptors
            .iter()
            .partition(|descriptor| ident::is_query(&descriptor.command));

        for descriptor in events.into_iter().chain(queries) {
            enums.register(descriptor);
        }

        tracing::debug!(
            groups = enums.groups.len(),
            aliases = enums.aliases.len(),
            "enum parameters canonicalized"
        );
        enums
    }

    fn register(&mut self, descriptor: &CommandDescriptor) {
        let command_ident = ident::normalize(&descriptor.command);
        for param in &descriptor.params {
            if param.kind != ParamKind::Enum {
                continue;
            }
            let Some(values) = param.values.as_ref() else {
                continue;
            };
            let local = ident::enum_local_name(&command_ident, &param.name);
            if self.members.contains_key(&local) {
                continue;
            }

            let index = match self.by_list.get(values) {
                Some(&index) => {
                    self.aliases
                        .insert(local.clone(), self.groups[index].name.clone());
                    index
                }
                None => {
                    let index = self.groups.len();
                    self.by_list.insert(values.clone(), index);
                    self.groups.push(EnumGroup {
                        name:    local.clone(),
                        values:  values.clone(),
                        command: descriptor.command.clone(),
                        param:   param.name.clone()
                    });
                    index
                }
            };
            self.members.insert(local, index);
        }
    }

    /// Groups in emission order.
    pub fn groups(&self) -> &[EnumGroup] {
        &self.groups
    }

    /// Group a local enum name belongs to.
    pub fn group_of(&self, local: &str) -> Option<&EnumGroup> {
        self.members.get(local).map(|&index| &self.groups[index])
    }

    /// Canonical name of a local enum name; unknown names map to themselves.
    pub fn canonical_name<'a>(&'a self, local: &'a str) -> &'a str {
        self.group_of(local).map_or(local, |group| group.name.as_str())
    }

    /// Non-canonical local names and their canonical targets, sorted.
    pub fn aliases(&self) -> &BTreeMap<String, String> {
        &self.aliases
    }
}
