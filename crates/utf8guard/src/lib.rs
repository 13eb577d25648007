//! Strict UTF-8 validation that reports exactly where, and why, input stops
//! being well-formed.
//!
//! [`validate`] walks a byte buffer once and returns a [`ValidationResult`]:
//! the kind of the first defect (if any), the well-formed prefix before it as
//! a [`Utf8Range`], and the number of codepoints in that prefix. Ranges can
//! then be decoded lazily with [`Utf8Range::codepoints`] without being
//! checked again.
//!
//! ```rust
//! use utf8guard::{ValidationError, validate};
//!
//! let input = b"caf\xC3\xA9 \xFF";
//! let result = validate(input);
//!
//! assert_eq!(result.error, Some(ValidationError::InvalidByte));
//! assert_eq!(result.valid_up_to(), 6);
//! assert_eq!(result.codepoint_count, 5);
//!
//! let decoded: Vec<u32> = result.range.codepoints().collect();
//! assert_eq!(decoded, [0x63, 0x61, 0x66, 0xE9, 0x20]);
//! ```
//!
//! [`validate_quick`] checks structure only and admits overlong and out of
//! range sequences. Neither validator rejects encoded surrogates.

#![no_std]

#[cfg(test)]
extern crate alloc;
#[cfg(test)]
extern crate std;

mod classify;
mod error;
mod range;
mod validate;
mod view;

#[cfg(any(test, feature = "fuzzing"))]
pub mod testing;

#[cfg(test)]
mod tests;

pub use error::{Utf8Error, ValidationError};
pub use range::{Codepoints, Cursor, Utf8Range};
pub use validate::{
    MAX_CODEPOINT, ValidationMode, ValidationResult, validate, validate_quick, validate_with,
};
pub use view::ByteView;

/// A decoded codepoint.
///
/// Not a `char`: quick validation admits values above `U+10FFFF`, and
/// surrogates pass both validators.
pub type Codepoint = u32;
