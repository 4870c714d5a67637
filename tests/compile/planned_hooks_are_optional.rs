// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use scpi_gen_core::{Dispatch, HookResult};
use scpi_gen_fixture::{
    CommandHooks,
    commands::{Handler, SourcePwmModeMode}
};

struct Minimal;

impl CommandHooks for Minimal {
    fn source_pwm_mode(&mut self, _mode: SourcePwmModeMode) -> HookResult {
        Ok(())
    }

    fn source_pwm_mode_query(&mut self, _mode: &mut SourcePwmModeMode) -> HookResult {
        Ok(())
    }

    fn source_pwm_safe_mode(&mut self, _mode: SourcePwmModeMode) -> HookResult {
        Ok(())
    }

    fn source_pwm_frequency(&mut self, _frequency: u32) -> HookResult {
        Ok(())
    }

    fn source_pwm_frequency_query(&mut self, _frequency: &mut u32) -> HookResult {
        Ok(())
    }

    fn source_pwm_phasen_duty(&mut self, _indices: [u32; 1], _duty: f32) -> HookResult {
        Ok(())
    }

    fn source_pwm_phasen_duty_query(&mut self, _indices: [u32; 1], _duty: &mut f32) -> HookResult {
        Ok(())
    }

    fn source_pwm_offset(&mut self, _offset: i32) -> HookResult {
        Ok(())
    }

    fn source_pwm_offset_query(&mut self, _offset: &mut i32) -> HookResult {
        Ok(())
    }

    fn outputn_state(&mut self, _indices: [u32; 1], _enabled: bool) -> HookResult {
        Ok(())
    }

    fn outputn_state_query(&mut self, _indices: [u32; 1], _enabled: &mut bool) -> HookResult {
        Ok(())
    }

    fn system_label(&mut self, _label: String) -> HookResult {
        Ok(())
    }

    fn system_label_query(&mut self, _label: &mut String) -> HookResult {
        Ok(())
    }

    fn measure_pwm(&mut self, _mode: &mut SourcePwmModeMode, _frequency: &mut u32) -> HookResult {
        Ok(())
    }
}

fn dispatches_to<H: ?Sized, D: Dispatch<H>>(_handler: D) {}

fn main() {
    let mut minimal = Minimal;
    assert!(minimal.source_pwm_deadtime(10).is_err());

    dispatches_to::<Minimal, _>(Handler::SourcePwmDeadtime);
    dispatches_to::<dyn CommandHooks, _>(Handler::MeasurePwm);
}
