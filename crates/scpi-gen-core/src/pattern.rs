// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SCPI header matching.
//!
//! Wire patterns in the generated `COMMANDS` table use the SCPI convention:
//! the upper-case prefix of each node is its short form, the whole node its
//! long form, and `#` marks a numeric suffix.
//!
//! | Pattern | Matches | Numbers |
//! |---------|---------|---------|
//! | `:SOURce:PWM:FREQuency` | `SOUR:PWM:FREQ`, `:source:pwm:frequency` | `[]` |
//! | `:SOURce:PWM:PHase#:DUTY` | `SOUR:PWM:PH2:DUTY` | `[2]` |
//! | `:SOURce:PWM:PHase#:DUTY` | `SOUR:PWM:PH:DUTY` | `[1]` |
//! | `:MEASure:VOLTage?` | `MEAS:VOLT?` | `[]` |
//!
//! Context implementations use [`match_header`] to answer
//! [`Context::command_numbers`](crate::Context::command_numbers).

/// Whether `input` is the long or short form of the mnemonic `pattern`.
///
/// The comparison is case-insensitive. The short form is the leading run of
/// characters of `pattern` that are not lower-case letters.
pub fn matches_mnemonic(pattern: &str, input: &str) -> bool {
    if input.is_empty() {
        return false;
    }
    let short_len = pattern
        .find(|c: char| c.is_ascii_lowercase())
        .unwrap_or(pattern.len());
    pattern.eq_ignore_ascii_case(input) || pattern[..short_len].eq_ignore_ascii_case(input)
}

/// Match a received program header against a wire pattern.
///
/// Returns the numeric suffixes in order of appearance, one per `#` in the
/// pattern. Absent suffixes default to `1`. A leading colon is optional on
/// both sides; a trailing `?` must be present on both or neither.
pub fn match_header(pattern: &str, header: &str) -> Option<Vec<i32>> {
    let (pattern, pattern_query) = split_query(pattern);
    let (header, header_query) = split_query(header);
    if pattern_query != header_query {
        return None;
    }

    let pattern_nodes: Vec<&str> = pattern.trim_start_matches(':').split(':').collect();
    let header_nodes: Vec<&str> = header.trim_start_matches(':').split(':').collect();
    if pattern_nodes.len() != header_nodes.len() {
        return None;
    }

    let mut numbers = Vec::new();
    for (pattern_node, header_node) in pattern_nodes.iter().zip(&header_nodes) {
        match pattern_node.strip_suffix('#') {
            Some(mnemonic) => {
                let digits = header_node
                    .bytes()
                    .rev()
                    .take_while(u8::is_ascii_digit)
                    .count();
                let (word, suffix) = header_node.split_at(header_node.len() - digits);
                if !matches_mnemonic(mnemonic, word) {
                    return None;
                }
                let number = if suffix.is_empty() {
                    1
                } else {
                    suffix.parse().ok()?
                };
                numbers.push(number);
            }
            None => {
                if !matches_mnemonic(pattern_node, header_node) {
                    return None;
                }
            }
        }
    }
    Some(numbers)
}

fn split_query(text: &str) -> (&str, bool) {
    match text.strip_suffix('?') {
        Some(stripped) => (stripped, true),
        None => (text, false)
    }
}
