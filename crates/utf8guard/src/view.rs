use core::{fmt, ops::Index};

use bstr::ByteSlice;

use crate::range::Utf8Range;

/// A read-only window over a caller-owned byte buffer.
///
/// This is the input to [`validate`](crate::validate) and
/// [`validate_quick`](crate::validate_quick). It never copies or owns the
/// bytes it looks at.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByteView<'a> {
    bytes: &'a [u8],
}

impl<'a> ByteView<'a> {
    /// Wraps `bytes` without inspecting them.
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Number of bytes in the view.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the view is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the byte at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    /// The underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// `[start, end)` of the view. Panics when out of range, like slice
    /// indexing.
    pub(crate) fn window(&self, start: usize, end: usize) -> &'a [u8] {
        &self.bytes[start..end]
    }

    /// Tags the first `len` bytes as well-formed.
    ///
    /// Only the scanner calls this, and only with an offset that sits on a
    /// sequence boundary it has already checked.
    pub(crate) fn to_utf8(self, len: usize) -> Utf8Range<'a> {
        Utf8Range::from_checked_prefix(&self.bytes[..len])
    }
}

impl Index<usize> for ByteView<'_> {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.bytes[index]
    }
}

impl fmt::Debug for ByteView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ByteView")
            .field(&self.bytes.as_bstr())
            .finish()
    }
}

impl<'a> From<&'a [u8]> for ByteView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for ByteView<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::new(bytes)
    }
}

impl<'a> From<&'a str> for ByteView<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}
