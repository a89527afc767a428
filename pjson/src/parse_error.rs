// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur during JSON parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    ExpectValue,
    /// A value was started but its lexical form was malformed.
    InvalidValue,
    /// A value parsed, but non-whitespace input remained after it.
    RootNotSingular,
    /// A well-formed number does not fit in an `f64`.
    NumberTooBig,
    /// A string was opened but the input ended before its closing quote.
    MissQuotationMark,
}

/// Outcome of an in-place parse, see [`crate::parse_into`].
pub type Status = Result<(), ParseError>;

/// Status code reported for a successful parse.
pub const STATUS_OK: u8 = 0;

impl ParseError {
    /// Numeric status code of this error. Codes start at 1, `0` is reserved for success.
    pub const fn code(self) -> u8 {
        match self {
            ParseError::ExpectValue => 1,
            ParseError::InvalidValue => 2,
            ParseError::RootNotSingular => 3,
            ParseError::NumberTooBig => 4,
            ParseError::MissQuotationMark => 5,
        }
    }

    /// Inverse of [`ParseError::code`]. Returns `None` for `0` and unknown codes.
    pub const fn from_code(code: u8) -> Option<ParseError> {
        match code {
            1 => Some(ParseError::ExpectValue),
            2 => Some(ParseError::InvalidValue),
            3 => Some(ParseError::RootNotSingular),
            4 => Some(ParseError::NumberTooBig),
            5 => Some(ParseError::MissQuotationMark),
            _ => None,
        }
    }
}

/// Collapses a [`Status`] into its numeric code.
pub const fn status_code(status: &Status) -> u8 {
    match status {
        Ok(()) => STATUS_OK,
        Err(e) => e.code(),
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ParseError::ExpectValue => "expected a value",
            ParseError::InvalidValue => "invalid value",
            ParseError::RootNotSingular => "unexpected data after the root value",
            ParseError::NumberTooBig => "number out of range",
            ParseError::MissQuotationMark => "missing closing quotation mark",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for ParseError {}
