//! Human-readable token listings.

use camino::Utf8Path;
use tinct_core::{LineTable, SemanticToken};

/// Renders `tokens` as an indented listing under a `path` header.
pub(crate) fn render_human(path: &Utf8Path, text: &str, tokens: &[SemanticToken]) -> String {
    let lines = LineTable::build(text);
    let mut output = String::new();
    output.push_str(path.as_str());
    output.push('\n');

    for token in tokens {
        let modifiers: Vec<_> = token.modifiers.iter().map(|m| m.as_str()).collect();
        let suffix = if modifiers.is_empty() {
            String::new()
        } else {
            format!(" [{}]", modifiers.join(", "))
        };
        let lexeme = lexeme(text, &lines, token).unwrap_or("?");
        output.push_str(&format!(
            "  {}:{}  {}{suffix}  {}\n",
            token.line.saturating_add(1),
            token.column.saturating_add(1),
            token.category,
            lexeme.replace('\r', "\\r").replace('\n', "\\n"),
        ));
    }
    output
}

fn lexeme<'a>(text: &'a str, lines: &LineTable, token: &SemanticToken) -> Option<&'a str> {
    let start = usize::try_from(lines.offset_of(token.position())?).ok()?;
    let end = start.checked_add(usize::try_from(token.length).ok()?)?;
    text.get(start..end)
}
