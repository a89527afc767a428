// SPDX-License-Identifier: Apache-2.0

use log::{debug, trace};

use crate::number_parser::{parse_float, scan_number};
use crate::parse_error::{ParseError, Status};
use crate::scratch_buffer::ScratchBuffer;
use crate::slice_input_buffer::{self, SliceInputBuffer};
use crate::value::Value;

/// Single-use JSON parser over an input slice.
///
/// The parser reads one root value, stages string content in its own
/// [`ScratchBuffer`], and releases that buffer when it is dropped.
// Lifetime 'a is the input buffer lifetime
pub struct Parser<'a> {
    input: SliceInputBuffer<'a>,
    scratch: ScratchBuffer,
}

impl<'a> Parser<'a> {
    /// Creates a parser for `input`.
    ///
    /// # Example
    /// ```
    /// use pjson::{Parser, Value};
    /// let mut value = Value::default();
    /// Parser::new(b" true ").parse_value(&mut value).unwrap();
    /// assert_eq!(value, Value::True);
    /// ```
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_scratch_capacity(input, crate::scratch_buffer::INIT_CAPACITY)
    }

    /// Creates a parser whose scratch buffer starts at `capacity` bytes once
    /// the first string is staged.
    pub fn with_scratch_capacity(input: &'a [u8], capacity: usize) -> Self {
        Parser {
            input: SliceInputBuffer::new(input),
            scratch: ScratchBuffer::with_capacity(capacity),
        }
    }

    /// The scratch buffer used to stage strings.
    pub fn scratch(&self) -> &ScratchBuffer {
        &self.scratch
    }

    /// Offset of the next unread input byte.
    pub fn position(&self) -> usize {
        self.input.current_pos()
    }

    /// Parses the entire input as exactly one JSON value.
    ///
    /// `value` is reset to `Null` first and is only written by a rule that
    /// succeeds. On error its content must not be relied on.
    pub fn parse_value(&mut self, value: &mut Value) -> Status {
        value.free();
        self.skip_whitespace();
        self.parse_any(value)?;
        self.skip_whitespace();
        if !self.input.is_at_end() {
            debug!(
                "trailing data after root value at offset {}",
                self.position()
            );
            return Err(ParseError::RootNotSingular);
        }
        Ok(())
    }

    fn skip_whitespace(&mut self) {
        self.input
            .skip_while(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'));
    }

    fn parse_any(&mut self, value: &mut Value) -> Status {
        trace!("parsing value at offset {}", self.position());
        let result = match self.input.peek() {
            None => Err(ParseError::ExpectValue),
            Some(b'n') => self.parse_literal(b"null", Value::Null, value),
            Some(b't') => self.parse_literal(b"true", Value::True, value),
            Some(b'f') => self.parse_literal(b"false", Value::False, value),
            Some(b'"') => self.parse_string(value),
            Some(b'-' | b'0'..=b'9') => self.parse_number(value),
            Some(_) => Err(ParseError::InvalidValue),
        };
        if let Err(e) = result {
            debug!("{e} at offset {}", self.position());
        }
        result
    }

    fn parse_literal(
        &mut self,
        literal: &'static [u8],
        parsed: Value,
        value: &mut Value,
    ) -> Status {
        if !self.input.remaining().starts_with(literal) || !self.ends_token(literal.len()) {
            return Err(ParseError::InvalidValue);
        }
        self.input.advance(literal.len());
        *value = parsed;
        Ok(())
    }

    fn parse_number(&mut self, value: &mut Value) -> Status {
        let text = self.input.remaining();
        let len = scan_number(text)?;
        if !self.ends_token(len) {
            return Err(ParseError::InvalidValue);
        }
        let number = parse_float(text.get(..len).ok_or(ParseError::InvalidValue)?)?;
        self.input.advance(len);
        value.set_number(number);
        Ok(())
    }

    fn parse_string(&mut self, value: &mut Value) -> Status {
        let head = self.scratch.top();
        // Opening quote
        self.input.advance(1);
        loop {
            match self.input.consume_byte() {
                Ok(b'"') => {
                    let len = self.scratch.top() - head;
                    value.set_string(self.scratch.pop(len));
                    return Ok(());
                }
                Ok(byte) => self.scratch.push_byte(byte),
                Err(slice_input_buffer::Error::ReachedEnd) => {
                    self.scratch.rollback(head);
                    return Err(ParseError::MissQuotationMark);
                }
            }
        }
    }

    /// True if a token of `len` bytes at the cursor is not glued to more
    /// token characters.
    fn ends_token(&self, len: usize) -> bool {
        !self.input.peek_at(len).is_some_and(is_token_continuation)
    }
}

/// Bytes that would extend a literal or number if they followed it directly.
fn is_token_continuation(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b'.' | b'+' | b'-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn parse(input: &[u8]) -> (Status, Value) {
        let mut value = Value::default();
        let status = Parser::new(input).parse_value(&mut value);
        (status, value)
    }

    #[test]
    fn parse_literals() {
        assert_eq!(parse(b"null"), (Ok(()), Value::Null));
        assert_eq!(parse(b"true"), (Ok(()), Value::True));
        assert_eq!(parse(b"false"), (Ok(()), Value::False));
        assert_eq!(parse(b" \t\r\nfalse \n"), (Ok(()), Value::False));
    }

    #[test]
    fn value_is_reset_to_null() {
        let mut value = Value::from("stale");
        let status = Parser::new(b"?").parse_value(&mut value);
        assert_eq!(status, Err(ParseError::InvalidValue));
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn trailing_whitespace_is_consumed() {
        let mut value = Value::default();
        let mut parser = Parser::new(b"true  ");
        assert_eq!(parser.parse_value(&mut value), Ok(()));
        assert_eq!(parser.position(), 6);
    }

    #[test]
    fn literal_mismatch_is_invalid() {
        let inputs: [&[u8]; 7] = [b"nul", b"nulL", b"tru", b"fals", b"t", b"truex", b"null_"];
        for input in inputs {
            assert_eq!(parse(input).0, Err(ParseError::InvalidValue), "{input:?}");
        }
    }

    #[test]
    fn parse_numbers() {
        assert_eq!(parse(b"0"), (Ok(()), Value::Number(0.0)));
        assert_eq!(parse(b"-1.5e2"), (Ok(()), Value::Number(-150.0)));
        assert_eq!(parse(b" 42 "), (Ok(()), Value::Number(42.0)));
    }

    #[test]
    fn number_failure_does_not_advance() {
        let mut value = Value::default();
        let mut parser = Parser::new(b"  1.x");
        assert_eq!(parser.parse_value(&mut value), Err(ParseError::InvalidValue));
        assert_eq!(parser.position(), 2);
    }

    #[test]
    fn number_glued_to_token_chars_is_invalid() {
        let inputs: [&[u8]; 6] = [b"01", b"0x0", b"0123", b"1.5.3", b"1e5e", b"2-"];
        for input in inputs {
            assert_eq!(parse(input).0, Err(ParseError::InvalidValue), "{input:?}");
        }
    }

    #[test]
    fn parse_strings() {
        let (status, value) = parse(br#""hello""#);
        assert_eq!(status, Ok(()));
        assert_eq!(value.get_string(), b"hello");

        let (status, value) = parse(br#""""#);
        assert_eq!(status, Ok(()));
        assert_eq!(value.get_string_length(), 0);
    }

    #[test]
    fn string_bytes_are_copied_verbatim() {
        let (status, value) = parse(b"\"a\\nb\\\\\"");
        assert_eq!(status, Ok(()));
        assert_eq!(value.get_string(), b"a\\nb\\\\");
    }

    #[test]
    fn string_scratch_is_empty_after_success() {
        let mut value = Value::default();
        let mut parser = Parser::new(b"\"abc\"");
        assert_eq!(parser.parse_value(&mut value), Ok(()));
        assert_eq!(parser.scratch().top(), 0);
    }

    #[test]
    fn unterminated_string_rolls_back_scratch() {
        let mut value = Value::default();
        let mut parser = Parser::new(b"\"abc");
        assert_eq!(
            parser.parse_value(&mut value),
            Err(ParseError::MissQuotationMark)
        );
        assert_eq!(parser.scratch().top(), 0);
        assert!(parser.scratch().capacity() > 0);
    }

    #[test]
    fn long_string_grows_scratch() {
        let mut input = vec![b'"'];
        input.extend(std::iter::repeat(b'x').take(1000));
        input.push(b'"');

        let mut value = Value::default();
        let mut parser = Parser::with_scratch_capacity(&input, 4);
        assert_eq!(parser.parse_value(&mut value), Ok(()));
        assert_eq!(value.get_string_length(), 1000);
        assert!(parser.scratch().capacity() >= 1000);
    }

    #[test]
    fn expect_value_on_blank_input() {
        assert_eq!(parse(b"").0, Err(ParseError::ExpectValue));
        assert_eq!(parse(b" \t\n\r").0, Err(ParseError::ExpectValue));
    }

    #[test]
    fn trailing_data_is_root_not_singular() {
        assert_eq!(parse(b"null x").0, Err(ParseError::RootNotSingular));
        assert_eq!(parse(b"\"a\"b").0, Err(ParseError::RootNotSingular));
        assert_eq!(parse(b"1 2").0, Err(ParseError::RootNotSingular));
    }

    #[test]
    fn token_continuation_bytes() {
        assert!(is_token_continuation(b'a'));
        assert!(is_token_continuation(b'7'));
        assert!(is_token_continuation(b'.'));
        assert!(!is_token_continuation(b' '));
        assert!(!is_token_continuation(b','));
        assert!(!is_token_continuation(b'"'));
    }
}
