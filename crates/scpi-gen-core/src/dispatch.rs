// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Command table entries and handler dispatch.
//!
//! The declaration artifact contains:
//!
//! ```rust,ignore
//! pub enum Handler { SourcePwmFrequency, SourcePwmFrequencyQuery, /* ... */ }
//!
//! pub static COMMANDS: &[CommandEntry<Handler>] = &[
//!     CommandEntry::new(":SOURce:PWM:FREQuency", Handler::SourcePwmFrequency),
//!     CommandEntry::new(":SOURce:PWM:FREQuency?", Handler::SourcePwmFrequencyQuery)
//! ];
//! ```
//!
//! and the definition artifact implements [`Dispatch`] for `Handler`, routing
//! every variant to its generated handler function.

use crate::{Context, ScpiResult, pattern::match_header};

/// Routes a handler identifier to its generated handler function.
///
/// `H` is the user type implementing the generated `CommandHooks` trait.
pub trait Dispatch<H: ?Sized>: Copy {
    /// Run the handler against the current command.
    fn invoke(self, context: &mut dyn Context, hooks: &mut H) -> ScpiResult;
}

/// One row of the generated command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandEntry<D> {
    /// Wire pattern, numeric suffixes marked with `#`.
    pub pattern: &'static str,
    /// Handler identifier.
    pub handler: D
}

impl<D: Copy> CommandEntry<D> {
    /// Create a table row.
    pub const fn new(pattern: &'static str, handler: D) -> Self {
        Self {
            pattern,
            handler
        }
    }

    /// Run the handler, pushing any failure into the context's error queue.
    ///
    /// Returns `true` when the handler succeeded.
    pub fn execute<H: ?Sized>(&self, context: &mut dyn Context, hooks: &mut H) -> bool
    where
        D: Dispatch<H>
    {
        match self.handler.invoke(context, hooks) {
            Ok(()) => true,
            Err(code) => {
                context.push_error(code);
                false
            }
        }
    }
}

/// Find the table row matching a received program header.
///
/// Returns the entry and the numeric suffixes extracted from the header.
pub fn find_command<'a, D>(
    table: &'a [CommandEntry<D>],
    header: &str
) -> Option<(&'a CommandEntry<D>, Vec<i32>)> {
    table.iter().find_map(|entry| {
        match_header(entry.pattern, header).map(|numbers| (entry, numbers))
    })
}
