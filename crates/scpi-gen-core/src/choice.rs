// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Choice tables for enumerated parameters.
//!
//! Every enumerated parameter of the schema gets a generated
//! `static <PARAM>_CHOICES: ChoiceTable`. The table maps each mnemonic to the
//! discriminant of the generated enum variant, in declaration order:
//!
//! ```rust,ignore
//! static MODE_CHOICES: ChoiceTable = ChoiceTable::new(&[
//!     Choice::new("OFF", SourcePwmModeMode::Off as i32),
//!     Choice::new("ONEPH", SourcePwmModeMode::Oneph as i32)
//! ]);
//! ```

use crate::pattern::matches_mnemonic;

/// One mnemonic and its ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// Mnemonic as declared in the schema.
    pub name:    &'static str,
    /// Discriminant of the generated enum variant.
    pub ordinal: i32
}

impl Choice {
    /// Create a choice entry.
    pub const fn new(name: &'static str, ordinal: i32) -> Self {
        Self {
            name,
            ordinal
        }
    }
}

/// Ordered list of choices for one enumerated parameter.
#[derive(Debug, Clone, Copy)]
pub struct ChoiceTable {
    choices: &'static [Choice]
}

impl ChoiceTable {
    /// Create a table over a static slice of choices.
    pub const fn new(choices: &'static [Choice]) -> Self {
        Self {
            choices
        }
    }

    /// Resolve a received mnemonic to its ordinal.
    ///
    /// Matching is case-insensitive and accepts the SCPI short form of
    /// mixed-case mnemonics (`ALIGN` for `ALIGNment`).
    pub fn ordinal_of(&self, mnemonic: &str) -> Option<i32> {
        self.choices
            .iter()
            .find(|choice| matches_mnemonic(choice.name, mnemonic))
            .map(|choice| choice.ordinal)
    }

    /// Reverse lookup of an ordinal to its declared mnemonic.
    pub fn name_of(&self, ordinal: i32) -> Option<&'static str> {
        self.choices
            .iter()
            .find(|choice| choice.ordinal == ordinal)
            .map(|choice| choice.name)
    }
}

/// Implemented by every generated enumerated parameter type.
///
/// Variants carry explicit 0-based discriminants in mnemonic declaration
/// order, so [`ChoiceEnum::ordinal`] is the discriminant.
pub trait ChoiceEnum: Copy + Sized {
    /// Number of variants.
    const COUNT: usize;

    /// Variant with the given discriminant.
    fn from_ordinal(ordinal: i32) -> Option<Self>;

    /// Discriminant of this variant.
    fn ordinal(self) -> i32;
}
