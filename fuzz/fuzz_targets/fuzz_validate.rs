#![no_main]
use std::cell::RefCell;

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, SeedableRng};
use utf8guard::{ValidationMode, testing::encode_codepoint, validate, validate_quick, validate_with};

thread_local! {
    // One SmallRng per thread, seeded once from the host OS
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// One unit of input. libFuzzer's byte-level mutations rarely produce whole
/// multi-byte sequences, so the mutator splices these in.
#[derive(Debug, Arbitrary)]
enum Piece {
    Scalar(u32),
    Overlong(u16),
    OutOfRange(u32),
    Truncated(u32, u8),
    Raw(u8),
}

impl Piece {
    fn write(&self, out: &mut Vec<u8>) {
        let mut buf = [0u8; 4];
        match *self {
            Piece::Scalar(cp) => out.extend_from_slice(encode_codepoint(cp % 0x11_0000, &mut buf)),
            Piece::Overlong(cp) => {
                // Four bytes for a value that needs at most three.
                let cp = u32::from(cp);
                out.extend_from_slice(&[
                    0xF0,
                    0x80 | ((cp >> 12) & 0x3F) as u8,
                    0x80 | ((cp >> 6) & 0x3F) as u8,
                    0x80 | (cp & 0x3F) as u8,
                ]);
            }
            Piece::OutOfRange(cp) => {
                let cp = 0x11_0000 + cp % 0xF_0000;
                out.extend_from_slice(encode_codepoint(cp, &mut buf));
            }
            Piece::Truncated(cp, keep) => {
                let seq = encode_codepoint(0x80 + cp % 0x10_FF80, &mut buf);
                let keep = 1 + usize::from(keep) % (seq.len() - 1);
                out.extend_from_slice(&seq[..keep]);
            }
            Piece::Raw(b) => out.push(b),
        }
    }
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if seed % 4 != 0 {
        return fuzzer_mutate(data, size, max_size);
    }

    // Splice a generated piece in at a random offset.
    let noise: Vec<u8> = with_rng(|rng| (0..16).map(|_| rng.random::<u8>()).collect());
    let Ok(piece) = Piece::arbitrary(&mut Unstructured::new(&noise)) else {
        return fuzzer_mutate(data, size, max_size);
    };
    let mut bytes = Vec::with_capacity(4);
    piece.write(&mut bytes);

    let at = with_rng(|rng| rng.random_range(0..=size));
    let mut spliced = Vec::with_capacity(size + bytes.len());
    spliced.extend_from_slice(&data[..at]);
    spliced.extend_from_slice(&bytes);
    spliced.extend_from_slice(&data[at..size]);

    let len = spliced.len().min(max_size);
    data[..len].copy_from_slice(&spliced[..len]);
    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

fn check(data: &[u8]) {
    let strict = validate(data);
    let quick = validate_quick(data);

    // Quick relaxes strict only on legality defects.
    match strict.error {
        Some(kind) if kind.is_legality() => {
            assert!(quick.valid_up_to() > strict.valid_up_to());
            assert!(quick.codepoint_count > strict.codepoint_count);
        }
        _ => assert_eq!(strict, quick),
    }
    if let Some(kind) = quick.error {
        assert!(!kind.is_legality(), "quick reported {kind:?}");
    }

    // Prefixes revalidate cleanly and decode to the reported count.
    for (mode, result) in [(ValidationMode::Strict, strict), (ValidationMode::Quick, quick)] {
        let again = validate_with(result.range.as_bytes(), mode);
        assert!(again.is_success());
        assert_eq!(again.codepoint_count, result.codepoint_count);
        assert_eq!(result.range.count_codepoints(), result.codepoint_count);
    }

    // Outside surrogates, strict draws the same line as core.
    let surrogate = strict
        .range
        .codepoints()
        .any(|cp| (0xD800..=0xDFFF).contains(&cp));
    if !surrogate {
        let core_up_to = match std::str::from_utf8(data) {
            Ok(s) => s.len(),
            Err(e) => e.valid_up_to(),
        };
        assert_eq!(strict.valid_up_to(), core_up_to);
    }
}

fuzz_target!(|data: &[u8]| check(data));
