//! Tests for relative token encoding.

use lsp_types::SemanticToken as LspToken;
use rstest::rstest;
use tinct_core::{ModifierSet, Position, SemanticToken, TokenCategory, TokenModifier};

use crate::{PositionEncoding, SemanticTokensEncoder};

fn token(line: u32, column: u32, length: u32, category: TokenCategory) -> SemanticToken {
    SemanticToken::new(
        Position::new(line, column),
        length,
        category,
        ModifierSet::EMPTY,
    )
}

fn declared(line: u32, column: u32, length: u32, category: TokenCategory) -> SemanticToken {
    SemanticToken::new(
        Position::new(line, column),
        length,
        category,
        ModifierSet::only(TokenModifier::Declaration),
    )
}

const fn lsp(
    delta_line: u32,
    delta_start: u32,
    length: u32,
    token_type: u32,
    token_modifiers_bitset: u32,
) -> LspToken {
    LspToken {
        delta_line,
        delta_start,
        length,
        token_type,
        token_modifiers_bitset,
    }
}

#[rstest]
#[case(PositionEncoding::Utf8)]
#[case(PositionEncoding::Utf16)]
fn empty_streams_encode_to_nothing(#[case] encoding: PositionEncoding) {
    let encoded = SemanticTokensEncoder::new("", encoding).encode(&[]);
    assert!(encoded.data.is_empty());
    assert_eq!(encoded.result_id, None);
}

#[test]
fn tokens_are_sorted_before_delta_encoding() {
    let text = "class Foo extends Bar\nobject Q";
    let traversal = [
        declared(1, 7, 1, TokenCategory::Class),
        token(0, 18, 3, TokenCategory::Interface),
        declared(0, 6, 3, TokenCategory::Class),
    ];

    let encoded = SemanticTokensEncoder::new(text, PositionEncoding::Utf8).encode(&traversal);

    assert_eq!(
        encoded.data,
        [lsp(0, 6, 3, 9, 1), lsp(0, 12, 3, 10, 0), lsp(1, 7, 1, 9, 1)]
    );
}

#[test]
fn ties_keep_their_input_order() {
    let text = "x";
    let tokens = [
        token(0, 0, 1, TokenCategory::Variable),
        token(0, 0, 1, TokenCategory::Property),
    ];

    let encoded = SemanticTokensEncoder::new(text, PositionEncoding::Utf8).encode(&tokens);

    assert_eq!(encoded.data, [lsp(0, 0, 1, 17, 0), lsp(0, 0, 1, 19, 0)]);
}

#[rstest]
#[case::bytes(
    PositionEncoding::Utf8,
    [lsp(0, 0, 3, 2, 0), lsp(0, 4, 2, 17, 0), lsp(0, 5, 7, 1, 0)]
)]
#[case::code_units(
    PositionEncoding::Utf16,
    [lsp(0, 0, 3, 2, 0), lsp(0, 4, 1, 17, 0), lsp(0, 4, 5, 1, 0)]
)]
fn columns_follow_the_negotiated_encoding(
    #[case] encoding: PositionEncoding,
    #[case] expected: [LspToken; 3],
) {
    let text = "val é = \"😀x\"";
    let tokens = [
        token(0, 0, 3, TokenCategory::Keyword),
        token(0, 4, 2, TokenCategory::Variable),
        token(0, 9, 7, TokenCategory::String),
    ];

    let encoded = SemanticTokensEncoder::new(text, encoding).encode(&tokens);

    assert_eq!(encoded.data, expected);
}

#[test]
fn earlier_lines_do_not_shift_later_columns() {
    let text = "// ünïcödé\r\nval x";
    let tokens = [
        token(1, 0, 3, TokenCategory::Keyword),
        token(1, 4, 1, TokenCategory::Variable),
    ];

    let encoded = SemanticTokensEncoder::new(text, PositionEncoding::Utf16).encode(&tokens);

    assert_eq!(encoded.data, [lsp(1, 0, 3, 2, 0), lsp(0, 4, 1, 17, 0)]);
}

#[test]
fn tokens_spanning_lines_are_split_per_line() {
    let text = "ab\ncd";
    let tokens = [token(0, 1, 4, TokenCategory::String)];

    let encoded = SemanticTokensEncoder::new(text, PositionEncoding::Utf16).encode(&tokens);

    assert_eq!(encoded.data, [lsp(0, 1, 1, 1, 0), lsp(1, 0, 2, 1, 0)]);
}

#[rstest]
#[case::bytes(
    PositionEncoding::Utf8,
    [lsp(0, 0, 1, 17, 0), lsp(0, 4, 5, 1, 0), lsp(1, 0, 6, 1, 0), lsp(0, 8, 1, 17, 0)]
)]
#[case::code_units(
    PositionEncoding::Utf16,
    [lsp(0, 0, 1, 17, 0), lsp(0, 4, 5, 1, 0), lsp(1, 0, 5, 1, 0), lsp(0, 7, 1, 17, 0)]
)]
fn multi_line_strings_keep_later_columns_in_units(
    #[case] encoding: PositionEncoding,
    #[case] expected: [LspToken; 4],
) {
    let text = "x = \"\"\"ab\ncé\"\"\"; y";
    let tokens = [
        token(0, 0, 1, TokenCategory::Variable),
        token(0, 4, 12, TokenCategory::String),
        token(1, 8, 1, TokenCategory::Variable),
    ];

    let encoded = SemanticTokensEncoder::new(text, encoding).encode(&tokens);

    assert_eq!(encoded.data, expected);
}

#[test]
fn windows_line_breaks_are_skipped_when_splitting() {
    let text = "s = \"\"\"a\r\nb\"\"\"";
    let tokens = [token(0, 4, 10, TokenCategory::String)];

    let encoded = SemanticTokensEncoder::new(text, PositionEncoding::Utf16).encode(&tokens);

    assert_eq!(encoded.data, [lsp(0, 4, 4, 1, 0), lsp(1, 0, 4, 1, 0)]);
}

#[test]
fn modifiers_travel_as_bitsets() {
    let text = "abstract class A";
    let mut modifiers = ModifierSet::only(TokenModifier::Declaration);
    modifiers.insert(TokenModifier::Abstract);
    let tokens = [SemanticToken::new(
        Position::new(0, 15),
        1,
        TokenCategory::Class,
        modifiers,
    )];

    let encoder = SemanticTokensEncoder::new(text, PositionEncoding::Utf8);
    let encoded = encoder.encode(&tokens);

    assert_eq!(encoder.encoding(), PositionEncoding::Utf8);
    assert_eq!(encoded.data, [lsp(0, 15, 1, 9, 0b1_0001)]);
}
