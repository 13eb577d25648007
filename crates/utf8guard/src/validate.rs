//! The scanner behind [`validate`] and [`validate_quick`].
//!
//! Both entry points run the same single pass over the input. The only
//! difference is whether a structurally sound sequence is also checked for
//! overlong encoding and for the `U+10FFFF` ceiling, which is selected by
//! [`ValidationMode`].

use crate::{
    Codepoint, ValidationError,
    classify::{self, Lead},
    error::Utf8Error,
    range::Utf8Range,
    view::ByteView,
};

/// Largest Unicode scalar value.
pub const MAX_CODEPOINT: Codepoint = 0x10_FFFF;

/// Which rules a scan enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ValidationMode {
    /// Structure plus legality: rejects overlong encodings and values above
    /// `U+10FFFF`.
    #[default]
    Strict,
    /// Structure only: lead bytes, continuation bytes and sequence lengths.
    Quick,
}

/// Outcome of a scan.
///
/// On failure, [`range`](Self::range) is the well-formed prefix that precedes
/// the offending sequence, and [`codepoint_count`](Self::codepoint_count)
/// counts the codepoints in that prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult<'a> {
    /// `None` when the whole input was well-formed.
    pub error: Option<ValidationError>,
    /// The validated prefix. Equal to the full input on success.
    pub range: Utf8Range<'a>,
    /// Codepoints decoded in `range`.
    pub codepoint_count: usize,
}

impl<'a> ValidationResult<'a> {
    /// Whether the whole input validated.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Offset of the first byte that is not part of the validated prefix.
    #[must_use]
    pub const fn valid_up_to(&self) -> usize {
        self.range.len()
    }

    /// Converts to a `Result`, so failures can be propagated with `?`.
    ///
    /// # Errors
    ///
    /// Returns [`Utf8Error`] describing the first defect when the input was
    /// not well-formed.
    pub fn into_result(self) -> Result<Utf8Range<'a>, Utf8Error> {
        match self.error {
            None => Ok(self.range),
            Some(kind) => Err(Utf8Error {
                kind,
                valid_up_to: self.valid_up_to(),
                codepoint_count: self.codepoint_count,
            }),
        }
    }
}

#[cfg(any(test, feature = "serde"))]
impl serde::Serialize for ValidationResult<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ValidationResult", 3)?;
        state.serialize_field("error", &self.error)?;
        state.serialize_field("valid_up_to", &self.valid_up_to())?;
        state.serialize_field("codepoint_count", &self.codepoint_count)?;
        state.end()
    }
}

/// Validates `bytes` as UTF-8, rejecting overlong encodings and codepoints
/// above `U+10FFFF`.
///
/// ```rust
/// use utf8guard::{ValidationError, validate};
///
/// let result = validate(&[0x41, 0xC0, 0x80]);
/// assert_eq!(result.error, Some(ValidationError::OverlongEncoding));
/// assert_eq!(result.range.as_bytes(), b"A");
/// assert_eq!(result.codepoint_count, 1);
/// ```
pub fn validate<'a>(bytes: impl Into<ByteView<'a>>) -> ValidationResult<'a> {
    scan(bytes.into(), ValidationMode::Strict)
}

/// Validates the structure of `bytes` only.
///
/// Reports the same errors as [`validate`] at the same offsets, except that
/// it never reports [`ValidationError::OverlongEncoding`] or
/// [`ValidationError::InvalidCodepoint`].
pub fn validate_quick<'a>(bytes: impl Into<ByteView<'a>>) -> ValidationResult<'a> {
    scan(bytes.into(), ValidationMode::Quick)
}

/// Validates `bytes` under an explicit [`ValidationMode`].
pub fn validate_with<'a>(
    bytes: impl Into<ByteView<'a>>,
    mode: ValidationMode,
) -> ValidationResult<'a> {
    scan(bytes.into(), mode)
}

fn scan(view: ByteView<'_>, mode: ValidationMode) -> ValidationResult<'_> {
    let mut codepoint_count = 0;
    let mut i = 0;

    let fail = |error, at, codepoint_count| ValidationResult {
        error: Some(error),
        range: view.to_utf8(at),
        codepoint_count,
    };

    while i < view.len() {
        let lead = view[i];
        let len = match Lead::of(lead) {
            Lead::Ascii => {
                i += 1;
                codepoint_count += 1;
                continue;
            }
            Lead::Continuation => {
                return fail(
                    ValidationError::UnexpectedContinuationByte,
                    i,
                    codepoint_count,
                );
            }
            Lead::Invalid => return fail(ValidationError::InvalidByte, i, codepoint_count),
            Lead::Two => 2,
            Lead::Three => 3,
            Lead::Four => 4,
        };

        if view.len() - i < len {
            return fail(ValidationError::UnexpectedEnd, i, codepoint_count);
        }
        let seq = view.window(i, i + len);
        if !classify::all_continuations(&seq[1..]) {
            return fail(
                ValidationError::UnexpectedNonContinuationByte,
                i,
                codepoint_count,
            );
        }

        if let Some(error) = legality_defect(seq, mode) {
            return fail(error, i, codepoint_count);
        }

        i += len;
        codepoint_count += 1;
    }

    ValidationResult {
        error: None,
        range: view.to_utf8(i),
        codepoint_count,
    }
}

/// Step 7 of the scan; only strict mode runs it.
fn legality_defect(seq: &[u8], mode: ValidationMode) -> Option<ValidationError> {
    match mode {
        ValidationMode::Strict => check_legality(seq).err(),
        ValidationMode::Quick => None,
    }
}

/// Range before overlong: a four byte sequence can be both, and an out of
/// range value is the one reported.
fn check_legality(seq: &[u8]) -> Result<(), ValidationError> {
    let cp = classify::decode(seq);
    if cp > MAX_CODEPOINT {
        return Err(ValidationError::InvalidCodepoint);
    }
    if cp < classify::min_codepoint(seq.len()) {
        return Err(ValidationError::OverlongEncoding);
    }
    Ok(())
}
