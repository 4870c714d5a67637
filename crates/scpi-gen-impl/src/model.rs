// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Command model: descriptors resolved against the canonical enum groups.
//!
//! # Architecture
//!
//! ```text
//! model.rs (coordinator)
//! ├── types.rs   - ResolvedCommand, ResolvedParam, HandlerSpec, Classification
//! └── builder.rs - resolution plus schema-wide name checks
//! ```
//!
//! # Data Structures
//!
//! ```text
//! CommandModel
//! └── commands: Vec<ResolvedCommand>
//!     ├── pattern, ident      (":SOURce:PWM:MODE", "SOURCE_PWM_MODE")
//!     ├── classification      (Inert | QueryOnly | EventOnly | EventWithQuery)
//!     ├── status              (Unspecified | Planned | Other)
//!     ├── indices: Vec<ResolvedIndex>
//!     ├── params: Vec<ResolvedParam>
//!     │   └── ty: ParamType   (Int/Uint/Float with bounds, Bool, Text, Enum(EnumRef))
//!     └── handlers: Vec<HandlerSpec>
//!         └── form, wire_pattern, hook, function, variant, planned_stub
//! ```
//!
//! Emitters read names from the model and never derive them again.

mod builder;
mod types;

#[cfg(test)]
mod tests;

pub use builder::build;
pub use types::{
    Classification, CommandModel, EnumRef, HandlerForm, HandlerSpec, NumericBounds, ParamType,
    ResolvedCommand, ResolvedIndex, ResolvedParam, Status
};
