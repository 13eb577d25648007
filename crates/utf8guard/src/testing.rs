//! Helpers shared by the test suites and the fuzz harness.

use crate::Codepoint;

/// Writes the shortest UTF-8 form of `cp` into `buf` and returns it.
///
/// Unlike [`char::encode_utf8`] this accepts surrogates and, for values up to
/// `0x1F_FFFF`, anything that fits a four byte sequence. That lets tests
/// produce input the engine must accept or reject without going through
/// `char`.
///
/// # Panics
///
/// Panics if `cp` does not fit in 21 bits.
pub fn encode_codepoint(cp: Codepoint, buf: &mut [u8; 4]) -> &[u8] {
    assert!(cp <= 0x1F_FFFF, "{cp:#X} does not fit a four byte sequence");
    // The masks keep every value below 0x100, so the casts never truncate.
    #[allow(clippy::cast_possible_truncation)]
    let len = match cp {
        0..=0x7F => {
            buf[0] = cp as u8;
            1
        }
        0x80..=0x7FF => {
            buf[0] = 0xC0 | (cp >> 6) as u8;
            buf[1] = 0x80 | (cp & 0x3F) as u8;
            2
        }
        0x800..=0xFFFF => {
            buf[0] = 0xE0 | (cp >> 12) as u8;
            buf[1] = 0x80 | ((cp >> 6) & 0x3F) as u8;
            buf[2] = 0x80 | (cp & 0x3F) as u8;
            3
        }
        _ => {
            buf[0] = 0xF0 | (cp >> 18) as u8;
            buf[1] = 0x80 | ((cp >> 12) & 0x3F) as u8;
            buf[2] = 0x80 | ((cp >> 6) & 0x3F) as u8;
            buf[3] = 0x80 | (cp & 0x3F) as u8;
            4
        }
    };
    &buf[..len]
}
