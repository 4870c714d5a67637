// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! A small PWM instrument whose command layer is generated from
//! `schema/commands.yaml` by the build script.
//!
//! The crate only hosts the generated code; behaviour lives in
//! [`CommandHooks`] implementations supplied by the firmware (or by tests).

/// Generated command layer.
pub mod commands {
    include!(concat!(env!("OUT_DIR"), "/scpi_commands_decl.rs"));
    include!(concat!(env!("OUT_DIR"), "/scpi_commands_defs.rs"));
}

/// Markdown reference rendered alongside the code.
pub const COMMAND_REFERENCE: &str = include_str!(concat!(env!("OUT_DIR"), "/SCPI_COMMANDS.md"));

pub use commands::{COMMANDS, CommandHooks, Handler};
