//! One-call entry points: text in, span stream out.

use tracing::debug;

use crate::ast::Node;
use crate::classifier::classify_tree;
use crate::collector::SemanticToken;
use crate::error::ParseError;
use crate::options::{HighlightOptions, TokenOrdering};
use crate::parser::TreeParser;

/// Log target for highlight calls.
const HIGHLIGHT_TARGET: &str = "tinct_core::highlight";

/// Parses `text` with `parser` and classifies the resulting tree.
///
/// # Errors
///
/// Returns the parser's error unchanged when no tree can be produced. No
/// partial stream is returned in that case.
pub fn highlight<P>(
    text: &str,
    parser: &P,
    options: &HighlightOptions,
) -> Result<Vec<SemanticToken>, ParseError>
where
    P: TreeParser + ?Sized,
{
    let root = parser.parse(text)?;
    Ok(highlight_tree(text, &root, options))
}

/// Classifies an already parsed tree of `text`.
#[must_use]
pub fn highlight_tree(text: &str, root: &Node, options: &HighlightOptions) -> Vec<SemanticToken> {
    let mut tokens = classify_tree(text, root);
    if options.ordering() == TokenOrdering::Position {
        tokens.sort_by_key(SemanticToken::position);
    }
    debug!(
        target: HIGHLIGHT_TARGET,
        statements = root.top_level().len(),
        tokens = tokens.len(),
        ordering = %options.ordering(),
        "classified document"
    );
    tokens
}
