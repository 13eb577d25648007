//! Leading-byte classification and codepoint reconstruction.
//!
//! Nothing here checks that a sequence is *legal*; that is the scanner's job.
//! These helpers only answer "how long is the sequence starting here" and
//! "what value do these bytes spell".

use crate::Codepoint;

/// What a byte means when it appears where a sequence should start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lead {
    /// `0xxxxxxx`
    Ascii,
    /// `10xxxxxx`, only valid after a lead byte
    Continuation,
    /// `110xxxxx`
    Two,
    /// `1110xxxx`
    Three,
    /// `11110xxx`
    Four,
    /// `11111xxx`, reserved for the retired 5 and 6 byte forms
    Invalid,
}

impl Lead {
    #[inline]
    pub(crate) const fn of(byte: u8) -> Self {
        match byte {
            0x00..=0x7F => Lead::Ascii,
            0x80..=0xBF => Lead::Continuation,
            0xC0..=0xDF => Lead::Two,
            0xE0..=0xEF => Lead::Three,
            0xF0..=0xF7 => Lead::Four,
            0xF8..=0xFF => Lead::Invalid,
        }
    }

    /// Total bytes in the sequence this byte starts, lead included.
    #[inline]
    pub(crate) const fn sequence_len(self) -> Option<usize> {
        match self {
            Lead::Ascii => Some(1),
            Lead::Two => Some(2),
            Lead::Three => Some(3),
            Lead::Four => Some(4),
            Lead::Continuation | Lead::Invalid => None,
        }
    }
}

#[inline]
pub(crate) const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// True when every byte of `trailing` matches `10xxxxxx`.
#[inline]
pub(crate) fn all_continuations(trailing: &[u8]) -> bool {
    trailing.iter().all(|&b| is_continuation(b))
}

/// Smallest value that needs a sequence of `len` bytes. Anything encoded with
/// `len` bytes but below this is overlong.
#[inline]
pub(crate) const fn min_codepoint(len: usize) -> Codepoint {
    match len {
        2 => 0x80,
        3 => 0x800,
        4 => 0x1_0000,
        _ => 0,
    }
}

/// Decodes a whole sequence. `seq.len()` selects the formula; continuation
/// markers are masked off without being checked.
#[inline]
pub(crate) fn decode(seq: &[u8]) -> Codepoint {
    match *seq {
        [b0] => Codepoint::from(b0),
        [b0, b1] => (Codepoint::from(b0 & 0x1F) << 6) | payload(b1),
        [b0, b1, b2] => (Codepoint::from(b0 & 0x0F) << 12) | (payload(b1) << 6) | payload(b2),
        [b0, b1, b2, b3] => {
            (Codepoint::from(b0 & 0x07) << 18)
                | (payload(b1) << 12)
                | (payload(b2) << 6)
                | payload(b3)
        }
        _ => {
            debug_assert!(false, "decode called with {} bytes", seq.len());
            0
        }
    }
}

#[inline]
fn payload(byte: u8) -> Codepoint {
    Codepoint::from(byte & 0x3F)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0x00, Lead::Ascii)]
    #[case(0x7F, Lead::Ascii)]
    #[case(0x80, Lead::Continuation)]
    #[case(0xBF, Lead::Continuation)]
    #[case(0xC0, Lead::Two)]
    #[case(0xDF, Lead::Two)]
    #[case(0xE0, Lead::Three)]
    #[case(0xEF, Lead::Three)]
    #[case(0xF0, Lead::Four)]
    #[case(0xF7, Lead::Four)]
    #[case(0xF8, Lead::Invalid)]
    #[case(0xFF, Lead::Invalid)]
    fn classifies_lead_bytes_by_high_bits(#[case] byte: u8, #[case] expected: Lead) {
        assert_eq!(Lead::of(byte), expected);
    }

    #[test]
    fn every_byte_has_one_class() {
        for byte in 0..=u8::MAX {
            let lead = Lead::of(byte);
            assert_eq!(
                lead == Lead::Continuation,
                is_continuation(byte),
                "byte {byte:#04X}"
            );
            assert_eq!(
                lead.sequence_len().is_none(),
                matches!(lead, Lead::Continuation | Lead::Invalid)
            );
        }
    }

    #[rstest]
    #[case(&[0x41], 0x41)]
    #[case(&[0xC3, 0xA9], 0xE9)]
    #[case(&[0xE2, 0x82, 0xAC], 0x20AC)]
    #[case(&[0xF0, 0x9F, 0x98, 0x80], 0x1_F600)]
    #[case(&[0xF4, 0x8F, 0xBF, 0xBF], 0x10_FFFF)]
    // overlong and out of range forms still decode; legality is checked later
    #[case(&[0xC0, 0x80], 0x00)]
    #[case(&[0xF4, 0x90, 0x80, 0x80], 0x11_0000)]
    #[case(&[0xF7, 0xBF, 0xBF, 0xBF], 0x1F_FFFF)]
    fn decodes_each_length(#[case] seq: &[u8], #[case] expected: Codepoint) {
        assert_eq!(decode(seq), expected);
    }

    #[test]
    fn continuation_check_spots_the_odd_byte() {
        assert!(all_continuations(&[0x80, 0xBF, 0xA0]));
        assert!(!all_continuations(&[0x80, 0x41]));
        assert!(!all_continuations(&[0xC0]));
        assert!(all_continuations(&[]));
    }

    #[test]
    fn minimum_values_sit_on_length_boundaries() {
        assert_eq!(min_codepoint(2), 0x7F + 1);
        assert_eq!(min_codepoint(3), 0x7FF + 1);
        assert_eq!(min_codepoint(4), 0xFFFF + 1);
    }
}
