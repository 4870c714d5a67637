// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime support for scpi-gen generated command handlers.
//!
//! The declaration and definition artifacts produced by `scpi-gen` are plain
//! Rust source files. They are `include!`d into a single module of the
//! instrument crate and compile against the types in this crate.
//!
//! # Overview
//!
//! | Item | Role in generated code |
//! |------|------------------------|
//! | [`Context`] | Protocol parser interface: indices, parameters, results, errors |
//! | [`ErrorCode`] | SCPI standard error numbers pushed into the error queue |
//! | [`ChoiceTable`] | Mnemonic ↔ ordinal table for enumerated parameters |
//! | [`ChoiceEnum`] | Implemented by every generated enumerated type |
//! | [`parse_indices`] | Index suffix extraction and range validation |
//! | [`parse_i32`], [`parse_u32`], [`parse_f32`] | Bounded numeric parameters |
//! | [`CommandEntry`] | One row of the generated `COMMANDS` table |
//! | [`Dispatch`] | Implemented by the generated `Handler` enum |
//!
//! # Usage
//!
//! ```rust,ignore
//! mod commands {
//!     include!(concat!(env!("OUT_DIR"), "/scpi_commands_decl.rs"));
//!     include!(concat!(env!("OUT_DIR"), "/scpi_commands_defs.rs"));
//! }
//!
//! struct Instrument { /* ... */ }
//!
//! impl commands::CommandHooks for Instrument {
//!     fn source_pwm_frequency(&mut self, frequency: f32) -> HookResult {
//!         self.pwm.set_frequency(frequency);
//!         Ok(())
//!     }
//!     // ...
//! }
//!
//! if let Some((entry, _numbers)) = find_command(commands::COMMANDS, "SOUR:PWM:FREQ") {
//!     entry.execute(&mut context, &mut instrument);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod choice;
mod context;
mod dispatch;
mod error;
mod params;
pub mod pattern;
pub mod prelude;

pub use choice::{Choice, ChoiceEnum, ChoiceTable};
pub use context::Context;
pub use dispatch::{CommandEntry, Dispatch, find_command};
pub use error::{ErrorCode, HookResult, ScpiResult};
pub use params::{
    Bounds, IndexRange, parse_bool, parse_choice, parse_f32, parse_i32, parse_indices,
    parse_text, parse_u32, write_choice
};
