// SPDX-License-Identifier: Apache-2.0

//! A minimal JSON value parser.
//!
//! Parses a complete input buffer holding one JSON literal (`null`, `true`,
//! `false`), number, or string into a [`Value`]. Containers are not part of
//! the grammar, and string content is copied byte for byte without escape
//! decoding.
//!
//! ```
//! use pjson::{parse_str, ParseError, ValueType};
//!
//! let value = parse_str(" -1.5e3 ").unwrap();
//! assert_eq!(value.get_type(), ValueType::Number);
//! assert_eq!(value.get_number(), -1500.0);
//!
//! assert_eq!(parse_str("null x"), Err(ParseError::RootNotSingular));
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod number_parser;

mod parse_error;
pub use parse_error::{status_code, ParseError, Status, STATUS_OK};

mod parser;
pub use parser::Parser;

mod scratch_buffer;
pub use scratch_buffer::{ScratchBuffer, INIT_CAPACITY};

mod slice_input_buffer;

mod value;
pub use value::{Value, ValueType};

/// Parses `input` as exactly one JSON value.
pub fn parse(input: &[u8]) -> Result<Value, ParseError> {
    let mut value = Value::default();
    parse_into(&mut value, input)?;
    Ok(value)
}

/// Parses a string slice, see [`parse`].
pub fn parse_str(input: &str) -> Result<Value, ParseError> {
    parse(input.as_bytes())
}

/// Parses `input` into an existing value.
///
/// `value` is reset to `Null` before parsing. After an error it holds no
/// meaningful content and should only be freed or overwritten.
pub fn parse_into(value: &mut Value, input: &[u8]) -> Status {
    Parser::new(input).parse_value(value)
}
