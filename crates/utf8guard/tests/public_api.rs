//! Exercises the crate the way a downstream caller would: validate untrusted
//! bytes, branch on the outcome, then decode the trusted part.
#![allow(missing_docs)]

use rstest::rstest;
use utf8guard::{
    ByteView, Utf8Error, Utf8Range, ValidationError, ValidationMode, validate, validate_quick,
    validate_with,
};

fn decode_or_report(input: &[u8]) -> Result<Vec<u32>, Utf8Error> {
    let range = validate(input).into_result()?;
    Ok(range.codepoints().collect())
}

#[test]
fn question_mark_propagation() {
    assert_eq!(decode_or_report("hé".as_bytes()), Ok(vec![0x68, 0xE9]));

    let err = decode_or_report(b"h\xE9llo").unwrap_err();
    assert_eq!(err.kind, ValidationError::UnexpectedNonContinuationByte);
    assert_eq!(err.valid_up_to, 1);
    assert_eq!(err.to_string(), "unexpected non-continuation byte at byte 1");
}

#[test]
fn partial_processing_of_a_bad_payload() {
    let payload = b"status: \xE2\x9C\x93 ok\xF5\x80\x80\x80 trailing";
    let result = validate(payload);

    assert_eq!(result.error, Some(ValidationError::InvalidCodepoint));
    assert_eq!(result.range.to_str(), Some("status: \u{2713} ok"));
    assert_eq!(result.codepoint_count, result.range.count_codepoints());
    assert_eq!(&payload[result.valid_up_to()..][..1], b"\xF5");
}

#[rstest]
#[case(ValidationMode::Strict)]
#[case(ValidationMode::Quick)]
fn entry_points_delegate_to_the_same_scan(#[case] mode: ValidationMode) {
    let input = b"ok\xC1\x81\xE0\x80";
    let expected = match mode {
        ValidationMode::Strict => validate(input),
        ValidationMode::Quick => validate_quick(input),
    };
    assert_eq!(validate_with(input, mode), expected);
}

#[test]
fn views_from_every_source_agree() {
    let text = "naïve";
    let a = validate(text);
    let b = validate(text.as_bytes());
    let c = validate(ByteView::new(text.as_bytes()));
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(a.codepoint_count, 5);
}

#[test]
fn assume_valid_iterates_like_validated() {
    let bytes = "κόσμε".as_bytes();
    let trusted = Utf8Range::assume_valid(bytes);
    let checked = validate(bytes).range;
    assert!(trusted.codepoints().eq(checked.codepoints()));
    assert_eq!(trusted, checked);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "assume_valid called on malformed bytes")]
fn assume_valid_checks_in_debug_builds() {
    let _ = Utf8Range::assume_valid(b"\xFF");
}

#[test]
fn manual_cursor_loop() {
    let range = validate("a€".as_bytes()).range;
    let mut cursor = range.begin();
    let end = range.end();
    let mut seen = Vec::new();
    while cursor != end {
        seen.push((cursor.position(), cursor.get()));
        cursor.advance();
    }
    assert_eq!(seen, [(0, Some(0x61)), (1, Some(0x20AC))]);
}

#[test]
fn debug_output_escapes_bytes() {
    let result = validate(b"ab\xFF");
    assert_eq!(format!("{:?}", result.range), r#"Utf8Range("ab")"#);
    assert_eq!(
        format!("{:?}", ByteView::from(b"ab\xFF")),
        r#"ByteView("ab\xff")"#
    );
}
