// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SCPI error numbers.
//!
//! Generated handlers never panic on bad input. Every failure is expressed as
//! an [`ErrorCode`] which the dispatcher pushes into the [`Context`] error
//! queue, where it is later reported through `SYSTem:ERRor?`.
//!
//! | Constant | Number | Raised by |
//! |----------|--------|-----------|
//! | [`ErrorCode::INVALID_SUFFIX`] | -131 | Index outside its declared range |
//! | [`ErrorCode::ILLEGAL_PARAMETER_VALUE`] | -224 | Numeric parameter out of bounds, unknown mnemonic |
//! | [`ErrorCode::EXECUTION_ERROR`] | -200 | Hooks of commands that are still planned |
//!
//! [`Context`]: crate::Context

use std::fmt;

/// Result of a generated dispatch handler.
pub type ScpiResult = Result<(), ErrorCode>;

/// Result of a hand-written override hook.
///
/// `Err(code)` corresponds to a negative status and is propagated into the
/// protocol error queue; `Ok(())` continues with response formatting.
pub type HookResult = Result<(), ErrorCode>;

/// A negative SCPI error number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(i16);

impl ErrorCode {
    /// Generic command error.
    pub const COMMAND_ERROR: Self = Self(-100);

    /// Parameter of the wrong type.
    pub const DATA_TYPE_ERROR: Self = Self(-104);

    /// Mandatory parameter absent.
    pub const MISSING_PARAMETER: Self = Self(-109);

    /// Program header not recognized.
    pub const UNDEFINED_HEADER: Self = Self(-113);

    /// Numeric suffix invalid for the header.
    pub const INVALID_SUFFIX: Self = Self(-131);

    /// Command could not be executed.
    pub const EXECUTION_ERROR: Self = Self(-200);

    /// Requested setting conflicts with the instrument state.
    pub const SETTINGS_CONFLICT: Self = Self(-221);

    /// Parameter outside its legal range.
    pub const ILLEGAL_PARAMETER_VALUE: Self = Self(-224);

    /// Create an error code from its SCPI number.
    pub const fn new(code: i16) -> Self {
        Self(code)
    }

    /// The SCPI error number.
    pub const fn code(self) -> i16 {
        self.0
    }

    /// Convert a C-style integer status into a hook result.
    ///
    /// Negative values are errors, zero and positive values are success.
    /// Values below `i16::MIN` saturate.
    ///
    /// ```rust
    /// use scpi_gen_core::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::from_status(0), Ok(()));
    /// assert_eq!(ErrorCode::from_status(-221), Err(ErrorCode::SETTINGS_CONFLICT));
    /// ```
    pub fn from_status(status: i32) -> crate::HookResult {
        if status >= 0 {
            return Ok(());
        }
        let code = i16::try_from(status).unwrap_or(i16::MIN);
        Err(Self(code))
    }

    /// Standard description for well-known error numbers.
    pub const fn description(self) -> &'static str {
        match self.0 {
            -100 => "Command error",
            -104 => "Data type error",
            -109 => "Missing parameter",
            -113 => "Undefined header",
            -131 => "Invalid suffix",
            -200 => "Execution error",
            -221 => "Settings conflict",
            -224 => "Illegal parameter value",
            _ => "Device-specific error"
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},\"{}\"", self.0, self.description())
    }
}

impl std::error::Error for ErrorCode {}
