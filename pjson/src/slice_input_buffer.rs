// SPDX-License-Identifier: Apache-2.0

/// Error type for SliceInputBuffer operations.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Reached the end of input data.
    ReachedEnd,
}

/// Read cursor over an immutable input slice.
///
/// The position only moves forward. The data itself is never copied.
#[derive(Debug)]
pub struct SliceInputBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceInputBuffer<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// True once every byte has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Returns the byte under the cursor without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Returns the byte `offset` positions past the cursor.
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.data.get(self.pos.checked_add(offset)?).copied()
    }

    /// Consumes one byte.
    pub fn consume_byte(&mut self) -> Result<u8, Error> {
        let byte = self.peek().ok_or(Error::ReachedEnd)?;
        self.pos += 1;
        Ok(byte)
    }

    /// Moves the cursor `n` bytes forward, stopping at the end of the data.
    pub fn advance(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.data.len());
    }

    /// Unconsumed input.
    pub fn remaining(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or(&[])
    }

    /// Advances past every leading byte matching `pred`.
    pub fn skip_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(byte) = self.peek() {
            if !pred(byte) {
                break;
            }
            self.pos += 1;
        }
    }
}
