// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;

/// Capacity allocated by the first push into an empty [`ScratchBuffer`].
pub const INIT_CAPACITY: usize = 256;

/// Growable byte stack used to stage string content during a parse.
///
/// Bytes are appended with [`push`](Self::push) and taken back from the tail
/// with [`pop`](Self::pop). The backing storage may move when it grows, so
/// callers only ever keep positions obtained from [`top`](Self::top), never
/// slices, across a push.
#[derive(Debug)]
pub struct ScratchBuffer {
    /// Backing storage. Its length is the capacity of the buffer.
    storage: Vec<u8>,
    /// Number of bytes in use, from the start of `storage`.
    top: usize,
    /// Capacity of the first allocation.
    init_capacity: usize,
}

impl ScratchBuffer {
    /// Creates an empty buffer. Nothing is allocated until the first push.
    pub fn new() -> Self {
        Self::with_capacity(INIT_CAPACITY)
    }

    /// Creates an empty buffer whose first allocation holds `init_capacity` bytes.
    pub fn with_capacity(init_capacity: usize) -> Self {
        Self {
            storage: Vec::new(),
            top: 0,
            init_capacity: init_capacity.max(1),
        }
    }

    /// Number of bytes currently in use.
    pub fn top(&self) -> usize {
        self.top
    }

    /// Number of bytes the buffer can hold before it has to grow.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.top == 0
    }

    /// Reserves `n` bytes at the tail and returns them for writing.
    ///
    /// Grows the storage by at least half of its current size, rounded up,
    /// whenever the request does not fit.
    pub fn push(&mut self, n: usize) -> &mut [u8] {
        let start = self.top;
        let end = start + n;
        if end > self.storage.len() {
            self.grow(end);
        }
        self.top = end;
        &mut self.storage[start..end]
    }

    /// Appends a single byte.
    pub fn push_byte(&mut self, byte: u8) {
        self.push(1)[0] = byte;
    }

    /// Removes the last `n` bytes and returns them.
    ///
    /// # Panics
    /// If fewer than `n` bytes are in use.
    pub fn pop(&mut self, n: usize) -> &[u8] {
        assert!(
            n <= self.top,
            "scratch buffer underflow: pop({n}) with {} bytes in use",
            self.top
        );
        self.top -= n;
        &self.storage[self.top..self.top + n]
    }

    /// Discards everything pushed after the mark `to`.
    ///
    /// # Panics
    /// If `to` is past the current top.
    pub fn rollback(&mut self, to: usize) {
        assert!(
            to <= self.top,
            "scratch buffer rollback to {to} past top {}",
            self.top
        );
        self.top = to;
    }

    fn grow(&mut self, required: usize) {
        let old = self.storage.len();
        let mut size = if old == 0 { self.init_capacity } else { old };
        while size < required {
            size += (size + 1) / 2;
        }
        log::trace!("scratch buffer grows from {old} to {size} bytes");
        self.storage.resize(size, 0);
    }
}

impl Default for ScratchBuffer {
    fn default() -> Self {
        Self::new()
    }
}
