// SPDX-License-Identifier: Apache-2.0

use alloc::boxed::Box;

/// Kind of a JSON value.
///
/// `Array` and `Object` are part of the JSON type set but the parser has no
/// grammar for containers, so no [`Value`] ever reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    False,
    True,
    Number,
    String,
    Array,
    Object,
}

/// A parsed JSON value.
///
/// String payloads are raw bytes owned by the value. They are copied from the
/// input unchanged, so they are not guaranteed to be UTF-8.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    False,
    True,
    Number(f64),
    String(Box<[u8]>),
}

impl Value {
    pub fn get_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::False => ValueType::False,
            Value::True => ValueType::True,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
        }
    }

    /// Releases any owned storage and resets the value to `Null`.
    ///
    /// Calling it again on a `Null` value does nothing.
    pub fn free(&mut self) {
        *self = Value::Null;
    }

    pub fn set_null(&mut self) {
        self.free();
    }

    /// # Panics
    /// If the value is neither `True` nor `False`.
    pub fn get_boolean(&self) -> bool {
        match self.as_bool() {
            Some(b) => b,
            None => self.type_mismatch("boolean"),
        }
    }

    pub fn set_boolean(&mut self, b: bool) {
        *self = if b { Value::True } else { Value::False };
    }

    /// # Panics
    /// If the value is not a `Number`.
    pub fn get_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            _ => self.type_mismatch("number"),
        }
    }

    pub fn set_number(&mut self, n: f64) {
        *self = Value::Number(n);
    }

    /// Returns the string bytes.
    ///
    /// # Panics
    /// If the value is not a `String`.
    pub fn get_string(&self) -> &[u8] {
        match self {
            Value::String(s) => &s[..],
            _ => self.type_mismatch("string"),
        }
    }

    /// # Panics
    /// If the value is not a `String`.
    pub fn get_string_length(&self) -> usize {
        self.get_string().len()
    }

    /// Replaces the value with a copy of `bytes` as a string. The previous
    /// payload, if any, is dropped first.
    pub fn set_string(&mut self, bytes: &[u8]) {
        self.free();
        *self = Value::String(Box::from(bytes));
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::String(s) => Some(&s[..]),
            _ => None,
        }
    }

    /// The string payload as `&str`, if this is a string holding valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes()
            .and_then(|bytes| core::str::from_utf8(bytes).ok())
    }

    fn type_mismatch(&self, wanted: &str) -> ! {
        panic!(
            "type mismatch: expected {wanted}, found {:?}",
            self.get_type()
        )
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        if b {
            Value::True
        } else {
            Value::False
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::String(Box::from(bytes))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::from(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_null() {
        let value = Value::default();
        assert_eq!(value.get_type(), ValueType::Null);
    }

    #[test]
    fn test_set_and_get_boolean() {
        let mut value = Value::default();
        value.set_boolean(true);
        assert_eq!(value.get_type(), ValueType::True);
        assert!(value.get_boolean());
        value.set_boolean(false);
        assert_eq!(value.get_type(), ValueType::False);
        assert!(!value.get_boolean());
    }

    #[test]
    fn test_set_and_get_number() {
        let mut value = Value::default();
        value.set_number(1234.5);
        assert_eq!(value.get_type(), ValueType::Number);
        assert_eq!(value.get_number(), 1234.5);
        assert_eq!(value.as_number(), Some(1234.5));
    }

    #[test]
    fn test_set_string_round_trip() {
        let mut value = Value::default();
        value.set_string(b"");
        assert_eq!(value.get_string(), b"");
        assert_eq!(value.get_string_length(), 0);

        value.set_string(b"Hello");
        assert_eq!(value.get_string(), b"Hello");
        assert_eq!(value.get_string_length(), 5);
        assert_eq!(value.as_str(), Some("Hello"));
    }

    #[test]
    fn test_set_string_keeps_embedded_zero() {
        let mut value = Value::default();
        value.set_string(b"a\0b\0");
        assert_eq!(value.get_string(), b"a\0b\0");
        assert_eq!(value.get_string_length(), 4);
    }

    #[test]
    fn test_set_string_replaces_previous_payload() {
        let mut value = Value::from("first");
        value.set_string(b"second");
        assert_eq!(value.get_string(), b"second");
    }

    #[test]
    fn test_free_is_idempotent() {
        let mut value = Value::from("abc");
        value.free();
        assert_eq!(value, Value::Null);
        value.free();
        assert_eq!(value, Value::Null);
        value.set_null();
        assert_eq!(value.get_type(), ValueType::Null);
    }

    #[test]
    fn test_as_str_rejects_invalid_utf8() {
        let value = Value::from(&b"\xFF\xFE"[..]);
        assert_eq!(value.as_bytes(), Some(&b"\xFF\xFE"[..]));
        assert_eq!(value.as_str(), None);
        assert_eq!(Value::Null.as_str(), None);
    }

    #[test]
    fn test_non_panicking_views() {
        assert_eq!(Value::True.as_bool(), Some(true));
        assert_eq!(Value::Null.as_bool(), None);
        assert_eq!(Value::from(2.0).as_bytes(), None);
        assert_eq!(Value::from("x").as_number(), None);
    }

    #[test]
    #[should_panic(expected = "type mismatch")]
    fn test_get_number_on_string_panics() {
        Value::from("1").get_number();
    }

    #[test]
    #[should_panic(expected = "type mismatch")]
    fn test_get_string_on_null_panics() {
        Value::Null.get_string();
    }

    #[test]
    #[should_panic(expected = "type mismatch")]
    fn test_get_boolean_on_number_panics() {
        Value::from(0.0).get_boolean();
    }
}
