use core::{fmt, iter::FusedIterator};

use bstr::{BStr, ByteSlice};

use crate::{
    Codepoint,
    classify::{self, Lead},
};

/// Bytes known to decompose into whole UTF-8 sequences.
///
/// Obtained from a [`ValidationResult`](crate::ValidationResult) (the
/// validated prefix), or from [`Utf8Range::assume_valid`] when the caller
/// already holds that guarantee.
///
/// "Well-formed" here means what the producing validator checked. A range
/// from [`validate_quick`](crate::validate_quick) may contain overlong or out
/// of range sequences; neither validator rejects surrogate codepoints.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Utf8Range<'a> {
    bytes: &'a [u8],
}

impl<'a> Utf8Range<'a> {
    pub(crate) const fn from_checked_prefix(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Tags `bytes` as well-formed without validating them.
    ///
    /// The caller asserts that `bytes` passes at least
    /// [`validate_quick`](crate::validate_quick). Debug builds check this and
    /// panic otherwise. In release builds a violation is not detected;
    /// iterating such a range yields unspecified codepoints but never reads
    /// outside `bytes`.
    #[must_use]
    pub fn assume_valid(bytes: &'a [u8]) -> Self {
        debug_assert!(
            crate::validate_quick(bytes).is_success(),
            "assume_valid called on malformed bytes: {:?}",
            bytes.as_bstr()
        );
        Self { bytes }
    }

    /// The validated bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The bytes as a [`BStr`], for display.
    #[must_use]
    pub fn as_bstr(&self) -> &'a BStr {
        self.bytes.as_bstr()
    }

    /// Length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the range holds no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrows the range as `&str` when it is also valid for Rust strings.
    ///
    /// Returns `None` for ranges containing surrogates, or overlong and out of
    /// range sequences admitted by quick validation.
    #[must_use]
    pub fn to_str(&self) -> Option<&'a str> {
        core::str::from_utf8(self.bytes).ok()
    }

    /// Cursor at the first codepoint.
    #[must_use]
    pub const fn begin(&self) -> Cursor<'a> {
        Cursor {
            bytes: self.bytes,
            pos: 0,
        }
    }

    /// Cursor one past the last codepoint.
    #[must_use]
    pub const fn end(&self) -> Cursor<'a> {
        Cursor {
            bytes: self.bytes,
            pos: self.bytes.len(),
        }
    }

    /// Lazily decodes the range one codepoint at a time.
    #[must_use]
    pub const fn codepoints(&self) -> Codepoints<'a> {
        Codepoints {
            front: self.begin(),
            end: self.end(),
        }
    }

    /// Walks the range and counts codepoints.
    #[must_use]
    pub fn count_codepoints(&self) -> usize {
        self.codepoints().count()
    }
}

impl fmt::Debug for Utf8Range<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Utf8Range").field(&self.as_bstr()).finish()
    }
}

impl<'a> IntoIterator for Utf8Range<'a> {
    type Item = Codepoint;
    type IntoIter = Codepoints<'a>;

    fn into_iter(self) -> Codepoints<'a> {
        self.codepoints()
    }
}

/// A position inside a [`Utf8Range`].
///
/// [`get`](Cursor::get) decodes the codepoint under the cursor and
/// [`advance`](Cursor::advance) steps over it. Neither re-validates; both rely
/// on the range's guarantee.
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Cursor<'_> {
    /// Byte offset from the start of the range.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Whether the cursor has reached the end of the range.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Decodes the codepoint starting at the cursor, or `None` at the end.
    #[must_use]
    pub fn get(&self) -> Option<Codepoint> {
        let lead = *self.bytes.get(self.pos)?;
        let len = self.step_len(lead);
        match self.bytes.get(self.pos..self.pos + len) {
            Some(seq) => Some(classify::decode(seq)),
            None => {
                // Truncated sequence in an unvalidated range: pad with empty
                // continuation payloads.
                let mut seq = [0x80; 4];
                let tail = &self.bytes[self.pos..];
                seq[..tail.len()].copy_from_slice(tail);
                Some(classify::decode(&seq[..len]))
            }
        }
    }

    /// Moves past the codepoint under the cursor. Does nothing at the end.
    pub fn advance(&mut self) {
        if let Some(&lead) = self.bytes.get(self.pos) {
            self.pos = (self.pos + self.step_len(lead)).min(self.bytes.len());
        }
    }

    fn step_len(&self, lead: u8) -> usize {
        let len = Lead::of(lead).sequence_len();
        debug_assert!(
            len.is_some(),
            "byte {lead:#04X} at {} cannot start a sequence",
            self.pos
        );
        len.unwrap_or(1)
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.bytes.as_ptr(), other.bytes.as_ptr()) && self.pos == other.pos
    }
}

impl Eq for Cursor<'_> {}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("pos", &self.pos)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Iterator over the codepoints of a [`Utf8Range`].
#[derive(Debug, Clone)]
pub struct Codepoints<'a> {
    front: Cursor<'a>,
    end: Cursor<'a>,
}

impl<'a> Codepoints<'a> {
    /// The bytes not yet decoded.
    #[must_use]
    pub fn remaining(&self) -> Utf8Range<'a> {
        Utf8Range::from_checked_prefix(&self.front.bytes[self.front.pos..])
    }
}

impl Iterator for Codepoints<'_> {
    type Item = Codepoint;

    fn next(&mut self) -> Option<Codepoint> {
        if self.front == self.end {
            return None;
        }
        let cp = self.front.get()?;
        self.front.advance();
        Some(cp)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.end.pos.saturating_sub(self.front.pos);
        (left.div_ceil(4), Some(left))
    }
}

impl FusedIterator for Codepoints<'_> {}
