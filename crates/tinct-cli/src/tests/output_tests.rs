//! Tests for token rendering.

use camino::Utf8Path;
use insta::assert_snapshot;
use serde_json::{Value, json};
use tinct_core::{
    HighlightOptions, JsonTreeParser, ModifierSet, Position, SemanticToken, TokenCategory,
    highlight,
};
use tinct_lsp::PositionEncoding;

use crate::output::{Highlighted, OutputFormat, render_human};
use crate::tests::support::{HELLO_SCALA, HELLO_TREE};

fn hello_tokens() -> Vec<SemanticToken> {
    highlight(
        HELLO_SCALA,
        &JsonTreeParser::new(HELLO_TREE),
        &HighlightOptions::default(),
    )
    .unwrap_or_else(|err| panic!("highlight: {err}"))
}

fn rendered(format: OutputFormat, encoding: PositionEncoding) -> String {
    let tokens = hello_tokens();
    let document = Highlighted {
        path: Utf8Path::new("hello.scala"),
        text: HELLO_SCALA,
        tokens: &tokens,
    };
    let mut out = Vec::new();
    document
        .write(format, encoding, &mut out)
        .unwrap_or_else(|err| panic!("write: {err}"));
    String::from_utf8(out).expect("utf8 output")
}

#[test]
fn human_output_lists_one_based_positions() {
    let output = render_human(Utf8Path::new("hello.scala"), HELLO_SCALA, &hello_tokens());

    assert_snapshot!(output, @r#"
    hello.scala
      1:8  class [declaration]  Hello
      2:3  keyword  val
      2:7  variable  greeting
      2:18  string  "hi"
    "#);
}

#[test]
fn human_output_escapes_line_breaks() {
    let text = "\"a\nb\"";
    let token = SemanticToken::new(
        Position::new(0, 0),
        5,
        TokenCategory::String,
        ModifierSet::EMPTY,
    );

    let output = render_human(Utf8Path::new("s.scala"), text, &[token]);

    assert_eq!(output, "s.scala\n  1:1  string  \"a\\nb\"\n");
}

#[test]
fn json_output_round_trips_the_stream() {
    let output = rendered(OutputFormat::Json, PositionEncoding::Utf16);

    let parsed: Vec<SemanticToken> =
        serde_json::from_str(&output).unwrap_or_else(|err| panic!("json: {err}"));
    assert_eq!(parsed, hello_tokens());
    assert!(output.ends_with("]\n"));
}

#[test]
fn lsp_output_carries_legend_and_relative_data() {
    let output = rendered(OutputFormat::Lsp, PositionEncoding::Utf16);

    let value: Value = serde_json::from_str(&output).unwrap_or_else(|err| panic!("json: {err}"));
    assert_eq!(value["positionEncoding"], json!("utf-16"));
    assert_eq!(
        value["data"],
        json!([0, 7, 5, 9, 1, 1, 2, 3, 2, 0, 0, 4, 8, 17, 0, 0, 11, 4, 1, 0])
    );
    assert_eq!(value["legend"]["tokenTypes"][9], json!("class"));
    assert_eq!(value["legend"]["tokenModifiers"][0], json!("declaration"));
    assert!(value.get("resultId").is_none());
}
