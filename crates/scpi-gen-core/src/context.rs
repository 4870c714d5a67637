// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The protocol parser interface used by generated handlers.

use crate::{ChoiceTable, ErrorCode};

/// Access to the command currently being executed.
///
/// Implemented by the instrument's SCPI parser. Generated handlers only talk
/// to the parser through this trait, always as `&mut dyn Context`, so one set
/// of generated handlers serves every transport (USB, TCP, UART).
///
/// Parameter reads consume the next parameter of the program message. A
/// failing read returns the error code to report, usually
/// [`ErrorCode::MISSING_PARAMETER`] or [`ErrorCode::DATA_TYPE_ERROR`].
pub trait Context {
    /// Fill `numbers` with the numeric suffixes of the matched header.
    ///
    /// Returns `false` when the header carries fewer suffixes than requested.
    fn command_numbers(&mut self, numbers: &mut [i32]) -> bool;

    /// Read a signed integer parameter.
    fn param_i32(&mut self) -> Result<i32, ErrorCode>;

    /// Read an unsigned integer parameter.
    fn param_u32(&mut self) -> Result<u32, ErrorCode>;

    /// Read a floating point parameter.
    fn param_f32(&mut self) -> Result<f32, ErrorCode>;

    /// Read a boolean parameter (`ON`, `OFF`, `1`, `0`).
    fn param_bool(&mut self) -> Result<bool, ErrorCode>;

    /// Read a character data (mnemonic) parameter.
    fn param_mnemonic(&mut self) -> Result<String, ErrorCode>;

    /// Read a string parameter.
    fn param_text(&mut self) -> Result<String, ErrorCode>;

    /// Read a mnemonic and resolve it against `choices`.
    ///
    /// Unknown mnemonics are reported as
    /// [`ErrorCode::ILLEGAL_PARAMETER_VALUE`].
    fn param_choice(&mut self, choices: &ChoiceTable) -> Result<i32, ErrorCode> {
        let mnemonic = self.param_mnemonic()?;
        choices
            .ordinal_of(&mnemonic)
            .ok_or(ErrorCode::ILLEGAL_PARAMETER_VALUE)
    }

    /// Append a signed integer to the response.
    fn result_i32(&mut self, value: i32);

    /// Append an unsigned integer to the response.
    fn result_u32(&mut self, value: u32);

    /// Append a floating point value to the response.
    fn result_f32(&mut self, value: f32);

    /// Append a boolean (`1`/`0`) to the response.
    fn result_bool(&mut self, value: bool);

    /// Append character data to the response.
    fn result_mnemonic(&mut self, value: &str);

    /// Append a quoted string to the response.
    fn result_text(&mut self, value: &str);

    /// Push an error into the instrument error queue.
    fn push_error(&mut self, code: ErrorCode);
}
