//! Tests for position encoding negotiation.

use lsp_types::PositionEncodingKind;
use rstest::rstest;

use crate::PositionEncoding;

#[rstest]
#[case(&[], PositionEncoding::Utf16)]
#[case(&[PositionEncodingKind::UTF16], PositionEncoding::Utf16)]
#[case(&[PositionEncodingKind::UTF32], PositionEncoding::Utf16)]
#[case(&[PositionEncodingKind::UTF16, PositionEncodingKind::UTF8], PositionEncoding::Utf8)]
#[case(&[PositionEncodingKind::UTF8], PositionEncoding::Utf8)]
fn negotiate_prefers_utf8(
    #[case] offered: &[PositionEncodingKind],
    #[case] expected: PositionEncoding,
) {
    assert_eq!(PositionEncoding::negotiate(offered), expected);
}

#[rstest]
#[case("utf-8", PositionEncoding::Utf8)]
#[case("UTF8", PositionEncoding::Utf8)]
#[case(" utf-16 ", PositionEncoding::Utf16)]
#[case("utf16", PositionEncoding::Utf16)]
fn parses_encoding_names(#[case] input: &str, #[case] expected: PositionEncoding) {
    assert_eq!(input.parse::<PositionEncoding>(), Ok(expected));
}

#[test]
fn rejects_unknown_encodings() {
    let error = "UTF-32"
        .parse::<PositionEncoding>()
        .expect_err("utf-32 is not supported");
    assert_eq!(error.input(), "utf-32");
    assert_eq!(error.to_string(), "unsupported position encoding 'utf-32'");
}

#[rstest]
#[case(PositionEncoding::Utf8, PositionEncodingKind::UTF8)]
#[case(PositionEncoding::Utf16, PositionEncodingKind::UTF16)]
fn names_match_protocol_kinds(
    #[case] encoding: PositionEncoding,
    #[case] kind: PositionEncodingKind,
) {
    assert_eq!(encoding.to_string(), kind.as_str());
    assert_eq!(encoding.kind(), kind);
}

#[test]
fn defaults_to_utf16() {
    assert_eq!(PositionEncoding::default(), PositionEncoding::Utf16);
}
