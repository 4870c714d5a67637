// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Index and parameter helpers called from generated handlers.
//!
//! # Validation Rules
//!
//! | Helper | Failure | Error |
//! |--------|---------|-------|
//! | [`parse_indices`] | suffix missing or outside its [`IndexRange`] | [`ErrorCode::INVALID_SUFFIX`] |
//! | [`parse_i32`], [`parse_u32`], [`parse_f32`] | value outside [`Bounds`] | [`ErrorCode::ILLEGAL_PARAMETER_VALUE`] |
//! | [`parse_choice`] | unknown mnemonic | [`ErrorCode::ILLEGAL_PARAMETER_VALUE`] |
//! | all | parser rejects the parameter | error reported by the [`Context`] |

use crate::{ChoiceEnum, ChoiceTable, Context, ErrorCode};

/// Closed range `[min, max]` of an index suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    /// Smallest accepted suffix.
    pub min: u32,
    /// Largest accepted suffix.
    pub max: u32
}

impl IndexRange {
    /// Create an index range.
    pub const fn new(min: u32, max: u32) -> Self {
        Self {
            min,
            max
        }
    }

    /// Whether a received suffix lies inside the range.
    pub fn contains(&self, value: i32) -> bool {
        u32::try_from(value).is_ok_and(|value| value >= self.min && value <= self.max)
    }
}

/// Optional lower and upper bound of a numeric parameter.
///
/// An absent bound means "no bound" on that side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    /// Inclusive lower bound.
    pub min: Option<T>,
    /// Inclusive upper bound.
    pub max: Option<T>
}

impl<T: Copy + PartialOrd> Bounds<T> {
    /// No bound on either side.
    pub const UNBOUNDED: Self = Self {
        min: None,
        max: None
    };

    /// Create bounds.
    pub const fn new(min: Option<T>, max: Option<T>) -> Self {
        Self {
            min,
            max
        }
    }

    /// Whether `value` satisfies both declared bounds.
    pub fn contains(&self, value: T) -> bool {
        let above_min = self.min.is_none_or(|min| value >= min);
        let below_max = self.max.is_none_or(|max| value <= max);
        above_min && below_max
    }

    fn check(&self, value: T) -> Result<T, ErrorCode> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(ErrorCode::ILLEGAL_PARAMETER_VALUE)
        }
    }
}

/// Read every index suffix of the current header and validate each one.
///
/// All `N` slots are read and all of them are checked against their own
/// range; any violation yields [`ErrorCode::INVALID_SUFFIX`].
pub fn parse_indices<const N: usize>(
    context: &mut dyn Context,
    ranges: &[IndexRange; N]
) -> Result<[u32; N], ErrorCode> {
    let mut numbers = [0_i32; N];
    if !context.command_numbers(&mut numbers) {
        return Err(ErrorCode::INVALID_SUFFIX);
    }

    let mut valid = true;
    let mut indices = [0_u32; N];
    for ((slot, number), range) in indices.iter_mut().zip(numbers).zip(ranges) {
        if range.contains(number) {
            *slot = number.unsigned_abs();
        } else {
            valid = false;
        }
    }

    if valid {
        Ok(indices)
    } else {
        Err(ErrorCode::INVALID_SUFFIX)
    }
}

/// Read a signed integer parameter and check its bounds.
pub fn parse_i32(context: &mut dyn Context, bounds: Bounds<i32>) -> Result<i32, ErrorCode> {
    bounds.check(context.param_i32()?)
}

/// Read an unsigned integer parameter and check its bounds.
pub fn parse_u32(context: &mut dyn Context, bounds: Bounds<u32>) -> Result<u32, ErrorCode> {
    bounds.check(context.param_u32()?)
}

/// Read a floating point parameter and check its bounds.
///
/// `NaN` never satisfies a declared bound.
pub fn parse_f32(context: &mut dyn Context, bounds: Bounds<f32>) -> Result<f32, ErrorCode> {
    bounds.check(context.param_f32()?)
}

/// Read a boolean parameter.
pub fn parse_bool(context: &mut dyn Context) -> Result<bool, ErrorCode> {
    context.param_bool()
}

/// Read a string parameter.
pub fn parse_text(context: &mut dyn Context) -> Result<String, ErrorCode> {
    context.param_text()
}

/// Read an enumerated parameter through its choice table.
pub fn parse_choice<T: ChoiceEnum>(
    context: &mut dyn Context,
    choices: &ChoiceTable
) -> Result<T, ErrorCode> {
    let ordinal = context.param_choice(choices)?;
    T::from_ordinal(ordinal).ok_or(ErrorCode::ILLEGAL_PARAMETER_VALUE)
}

/// Write the mnemonic of an enumerated value to the response.
///
/// When the ordinal has no entry in `choices` nothing is written and no
/// error is raised.
pub fn write_choice<T: ChoiceEnum>(context: &mut dyn Context, choices: &ChoiceTable, value: T) {
    if let Some(name) = choices.name_of(value.ordinal()) {
        context.result_mnemonic(name);
    }
}
