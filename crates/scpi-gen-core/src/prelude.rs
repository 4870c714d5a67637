// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for hook implementations.
//!
//! # Usage
//!
//! ```rust,ignore
//! use scpi_gen_core::prelude::*;
//! ```

pub use crate::{
    ChoiceEnum, CommandEntry, Context, Dispatch, ErrorCode, HookResult, ScpiResult, find_command
};
