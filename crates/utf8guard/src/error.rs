use thiserror::Error;

/// Why a byte sequence is not well-formed UTF-8.
///
/// Exactly one kind is reported per failure, for the first sequence that
/// breaks a rule.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ValidationError {
    /// A lead byte of the form `11111xxx`, which no legal sequence starts
    /// with.
    #[error("invalid byte")]
    InvalidByte,
    /// A four byte sequence decoding to a value above `U+10FFFF`.
    #[error("invalid codepoint")]
    InvalidCodepoint,
    /// A sequence longer than the shortest encoding of its value.
    #[error("overlong encoding")]
    OverlongEncoding,
    /// A `10xxxxxx` byte where a sequence should start.
    #[error("unexpected continuation byte")]
    UnexpectedContinuationByte,
    /// A byte inside a multi-byte sequence that is not `10xxxxxx`.
    #[error("unexpected non-continuation byte")]
    UnexpectedNonContinuationByte,
    /// The input stops partway through a multi-byte sequence.
    #[error("unexpected end of input")]
    UnexpectedEnd,
}

impl ValidationError {
    /// Stable `snake_case` identifier, as used by the serialized forms.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::InvalidByte => "invalid_byte",
            Self::InvalidCodepoint => "invalid_codepoint",
            Self::OverlongEncoding => "overlong_encoding",
            Self::UnexpectedContinuationByte => "unexpected_continuation_byte",
            Self::UnexpectedNonContinuationByte => "unexpected_non_continuation_byte",
            Self::UnexpectedEnd => "unexpected_end",
        }
    }

    /// Whether quick validation would have let this defect through.
    ///
    /// Quick validation checks structure only, so it never reports these two.
    #[must_use]
    pub const fn is_legality(self) -> bool {
        matches!(self, Self::InvalidCodepoint | Self::OverlongEncoding)
    }
}

/// A failed validation, carrying where it failed.
///
/// Produced by [`ValidationResult::into_result`](crate::ValidationResult::into_result).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at byte {valid_up_to}")]
pub struct Utf8Error {
    /// What went wrong.
    pub kind: ValidationError,
    /// Offset of the first byte of the offending sequence.
    pub valid_up_to: usize,
    /// Codepoints decoded before the offending sequence.
    pub codepoint_count: usize,
}
