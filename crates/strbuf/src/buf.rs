//! The growable byte buffer underlying every other operation.
//!
//! A [`Buf`] owns a contiguous, mutable byte region and tracks two numbers:
//! `len`, the count of meaningful bytes, and the materialized capacity of the
//! backing storage. The byte at `len` is always the NUL terminator once the
//! buffer is allocated, so `len` is strictly below capacity. Bytes exposed by
//! growth are filled with a fixed stamp so that a read of logically unused
//! memory is recognizable in a debugger; the stamp never appears in
//! length-bounded reads.

use alloc::vec::Vec;
use core::fmt;

use bstr::ByteSlice;

/// Fill value for freshly grown, logically unused storage.
pub(crate) const MEMORY_STAMP: u8 = 0x55;

/// Default capacity for scratch buffers built by tokenizing, formatting and
/// radix conversion.
pub(crate) const SCRATCH_CAPACITY: usize = 0x20;

/// Out-of-band result of [`Buf::compare`]: the operands are unallocated or
/// differ in length, so no byte difference exists. Outside the `-255..=255`
/// range a byte comparison can produce.
pub const CMP_ERR: i32 = 0x100;

/// An owned growable byte string with tracked length and capacity.
///
/// Two states exist: *unallocated* (no backing storage; [`Buf::new`] and
/// [`Buf::default`] produce this, [`Buf::release`] returns to it) and
/// *allocated*. Most operations treat an unallocated operand as a quiet
/// failure rather than a panic; see the individual methods.
#[derive(Clone)]
pub struct Buf {
    data: Vec<u8>,
    len: usize,
}

impl Buf {
    /// Creates an unallocated buffer. No storage is reserved until the first
    /// [`grow`](Buf::grow) or write-type operation on an allocated buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            len: 0,
        }
    }

    /// Allocated-empty buffer with room for `capacity` bytes. Internal
    /// callers guarantee `capacity > 0`.
    pub(crate) fn alloc_empty(capacity: usize) -> Self {
        let mut buf = Self::new();
        buf.grow(capacity);
        buf
    }

    /// Creates a buffer holding a copy of `bytes`, sized exactly to fit them
    /// plus the terminator. Returns `None` for empty input.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.is_empty() {
            return None;
        }
        let mut buf = Self::alloc_empty(bytes.len() + 1);
        buf.write(0, bytes);
        Some(buf)
    }

    /// Creates an allocated buffer of length zero with at least
    /// `min_capacity` bytes of room. Returns `None` when `min_capacity` is
    /// zero.
    #[must_use]
    pub fn with_capacity(min_capacity: usize) -> Option<Self> {
        if min_capacity == 0 {
            return None;
        }
        Some(Self::alloc_empty(min_capacity))
    }

    /// Grows capacity by `additional` bytes plus half the current capacity,
    /// so repeated small grows amortize. New storage is stamp-filled. Length
    /// and content below it are untouched.
    ///
    /// Growing an unallocated buffer by zero is a no-op; growing it by more
    /// allocates and leaves it empty and terminated.
    pub fn grow(&mut self, additional: usize) {
        let was_unallocated = self.data.is_empty();
        let target = self.data.len() + additional + self.data.len() / 2;
        self.data.resize(target, MEMORY_STAMP);
        if was_unallocated && !self.data.is_empty() {
            self.data[0] = 0;
        }
    }

    /// Frees the backing storage and returns the buffer to the unallocated
    /// state. Dropping a `Buf` releases it implicitly; this exists for
    /// callers that want to reuse the handle afterwards.
    pub fn release(&mut self) {
        self.data = Vec::new();
        self.len = 0;
    }

    /// Resets length to zero, keeping the allocation. The terminator moves
    /// to offset zero; capacity is unchanged.
    pub fn zero(&mut self) {
        self.len = 0;
        if !self.data.is_empty() {
            self.data[0] = 0;
        }
    }

    /// Whether backing storage exists.
    #[must_use]
    pub fn is_allocated(&self) -> bool {
        !self.data.is_empty()
    }

    /// Whether the buffer is unallocated or holds zero logical bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty() || self.len == 0
    }

    /// Number of meaningful bytes, excluding the terminator.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Total bytes of backing storage, including terminator room and growth
    /// slack. Zero when unallocated.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// The meaningful bytes. Empty for an unallocated or zero-length buffer.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Copies `bytes` into the buffer starting at `offset`, growing as
    /// needed, then sets `len = offset + bytes.len()` and terminates.
    ///
    /// Fails (returns `false`) only when the buffer is unallocated. A
    /// zero-length write succeeds; note it still truncates `len` to `offset`.
    /// When `offset` lies past the current length, the gap keeps whatever
    /// bytes occupied it (stamp or stale content) — plain memory-copy
    /// semantics, no zero-filling.
    pub fn write(&mut self, offset: usize, bytes: &[u8]) -> bool {
        if !self.is_allocated() {
            return false;
        }
        let end = offset + bytes.len();
        if end + 1 > self.data.len() {
            self.grow(end + 1);
        }
        self.data[offset..end].copy_from_slice(bytes);
        self.len = end;
        self.data[end] = 0;
        true
    }

    /// Returns a copy of this buffer's contents in fresh storage, with a
    /// little slack. `None` when unallocated; an allocated-empty source
    /// yields an allocated-empty copy.
    #[must_use]
    pub fn copy(&self) -> Option<Self> {
        if !self.is_allocated() {
            return None;
        }
        let mut out = Self::alloc_empty(self.len + 2);
        out.push(self);
        Some(out)
    }

    /// Replaces this buffer's contents with `src`'s. Fails when either side
    /// is unallocated. An allocated-empty `src` succeeds and empties `self`.
    pub fn set_from(&mut self, src: &Self) -> bool {
        if !src.is_allocated() {
            return false;
        }
        self.write(0, src.as_bytes())
    }

    /// Appends `src`'s contents. Fails when `self` is unallocated or `src`
    /// is empty — the "no change, no success" contract.
    pub fn push(&mut self, src: &Self) -> bool {
        self.push_bytes(src.as_bytes())
    }

    /// Appends a raw byte slice under the same contract as
    /// [`push`](Buf::push).
    pub fn push_bytes(&mut self, bytes: &[u8]) -> bool {
        if !self.is_allocated() || bytes.is_empty() {
            return false;
        }
        self.write(self.len, bytes)
    }

    /// Replaces this buffer's contents with the first `max_len` bytes of
    /// `src`, clamped to `src.len()`. Fails when `self` is unallocated or
    /// `src` is empty.
    pub fn copy_prefix(&mut self, src: &Self, max_len: usize) -> bool {
        self.copy_prefix_bytes(src.as_bytes(), max_len)
    }

    /// Slice-source variant of [`copy_prefix`](Buf::copy_prefix).
    pub fn copy_prefix_bytes(&mut self, bytes: &[u8], max_len: usize) -> bool {
        if !self.is_allocated() || bytes.is_empty() {
            return false;
        }
        let take = max_len.min(bytes.len());
        self.write(0, &bytes[..take])
    }

    /// Compares contents byte for byte.
    ///
    /// Returns `0` for equal-length, byte-identical buffers; the difference
    /// of the first differing byte pair otherwise; and the out-of-band
    /// [`CMP_ERR`] when either operand is unallocated or the lengths differ.
    /// This is equality plus a diagnostic difference, not a three-way
    /// ordering.
    #[must_use]
    pub fn compare(&self, other: &Self) -> i32 {
        if !self.is_allocated() || !other.is_allocated() || self.len != other.len {
            return CMP_ERR;
        }
        for (a, b) in self.as_bytes().iter().zip(other.as_bytes()) {
            if a != b {
                return i32::from(*a) - i32::from(*b);
            }
        }
        0
    }

    /// Returns a new buffer with the bytes in reverse order. `None` for an
    /// empty or unallocated source.
    #[must_use]
    pub fn reversed(&self) -> Option<Self> {
        if self.is_empty() {
            return None;
        }
        let mut out = self.copy()?;
        out.data[..out.len].reverse();
        Some(out)
    }

    /// Returns this buffer's contents concatenated `count` times. `None`
    /// when the source is empty or `count` is zero.
    #[must_use]
    pub fn repeated(&self, count: usize) -> Option<Self> {
        if self.is_empty() || count == 0 {
            return None;
        }
        let mut out = Self::alloc_empty(self.len * count + 2);
        for _ in 0..count {
            out.push(self);
        }
        Some(out)
    }

    /// Upper-cases ASCII letters in place; other bytes are untouched.
    pub fn make_ascii_uppercase(&mut self) {
        self.data[..self.len].make_ascii_uppercase();
    }

    /// Lower-cases ASCII letters in place; other bytes are untouched.
    pub fn make_ascii_lowercase(&mut self) {
        self.data[..self.len].make_ascii_lowercase();
    }

    /// Full backing storage, terminator and slack included. Test hook for
    /// invariant checks.
    #[cfg(test)]
    pub(crate) fn raw_storage(&self) -> &[u8] {
        &self.data
    }
}

impl Default for Buf {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Buf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buf")
            .field("data", &self.as_bytes().as_bstr())
            .field("len", &self.len)
            .field("capacity", &self.data.len())
            .finish()
    }
}

impl fmt::Display for Buf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_bytes().as_bstr(), f)
    }
}

impl PartialEq for Buf {
    fn eq(&self, other: &Self) -> bool {
        self.is_allocated() == other.is_allocated() && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Buf {}

impl PartialEq<[u8]> for Buf {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for Buf {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for Buf {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<&str> for Buf {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}
