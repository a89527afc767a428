// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::parse_error::ParseError;

/// Measures the JSON number at the start of `bytes`.
///
/// Grammar: `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`
///
/// Returns the length of the number text. Anything that starts like a
/// number but breaks the grammar is `InvalidValue`.
pub fn scan_number(bytes: &[u8]) -> Result<usize, ParseError> {
    let at = |i: usize| bytes.get(i).copied();
    let mut end = 0;

    if at(end) == Some(b'-') {
        end += 1;
    }

    match at(end) {
        Some(b'0') => end += 1,
        Some(b'1'..=b'9') => end = skip_digits(bytes, end + 1),
        _ => return Err(ParseError::InvalidValue),
    }

    if at(end) == Some(b'.') {
        end = require_digits(bytes, end + 1)?;
    }

    if matches!(at(end), Some(b'e' | b'E')) {
        end += 1;
        if matches!(at(end), Some(b'+' | b'-')) {
            end += 1;
        }
        end = require_digits(bytes, end)?;
    }

    Ok(end)
}

/// Index of the first non-digit at or after `start`.
fn skip_digits(bytes: &[u8], start: usize) -> usize {
    let run = bytes
        .get(start..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count());
    start + run
}

/// Like [`skip_digits`], but at least one digit must be present.
fn require_digits(bytes: &[u8], start: usize) -> Result<usize, ParseError> {
    let end = skip_digits(bytes, start);
    if end == start {
        return Err(ParseError::InvalidValue);
    }
    Ok(end)
}

/// Converts validated number text into an `f64`.
///
/// Magnitudes past `f64::MAX` are `NumberTooBig`. Magnitudes below the
/// smallest subnormal round to zero and are returned as such.
pub fn parse_float(bytes: &[u8]) -> Result<f64, ParseError> {
    // Number text is pure ASCII once scanned
    let s = core::str::from_utf8(bytes).map_err(|_| ParseError::InvalidValue)?;
    match f64::from_str(s) {
        Ok(val) if val.is_finite() => Ok(val),
        Ok(_) => Err(ParseError::NumberTooBig),
        Err(_) => Err(ParseError::InvalidValue),
    }
}
