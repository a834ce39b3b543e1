//! The seam between the classifier and an external parser.
//!
//! Parsing is not done here. A [`TreeParser`] hands back a finished
//! [`Node`] for a document, or fails. [`JsonTreeParser`] covers the common
//! case where the tree has already been produced and serialised elsewhere.

use tracing::debug;

use crate::ast::Node;
use crate::error::ParseError;

/// Log target for tree acquisition.
const PARSER_TARGET: &str = "tinct_core::parser";

/// Source of syntax trees for documents.
pub trait TreeParser {
    /// Produces the syntax tree of `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if no tree can be produced for `text`.
    fn parse(&self, text: &str) -> Result<Node, ParseError>;
}

impl<F> TreeParser for F
where
    F: Fn(&str) -> Result<Node, ParseError>,
{
    fn parse(&self, text: &str) -> Result<Node, ParseError> {
        self(text)
    }
}

/// Deserialises a syntax tree from its JSON wire format.
///
/// # Errors
///
/// Returns [`ParseError::InvalidTree`] if `json` is not a valid tree.
///
/// # Example
///
/// ```
/// use tinct_core::{Node, parse_tree_json};
///
/// let node = parse_tree_json(r#"{"type": "Term.Name", "pos": {"start": 0, "end": 1}, "value": "x"}"#)?;
/// assert_eq!(node.kind(), "Term.Name");
/// # Ok::<(), tinct_core::ParseError>(())
/// ```
pub fn parse_tree_json(json: &str) -> Result<Node, ParseError> {
    let node: Node = serde_json::from_str(json)?;
    debug!(target: PARSER_TARGET, kind = node.kind(), "deserialised syntax tree");
    Ok(node)
}

/// Parser backed by a tree serialised ahead of time.
///
/// The document text is not inspected; the tree is trusted to describe it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonTreeParser {
    json: String,
}

impl JsonTreeParser {
    /// Wraps a serialised tree.
    #[must_use]
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl TreeParser for JsonTreeParser {
    fn parse(&self, text: &str) -> Result<Node, ParseError> {
        debug!(
            target: PARSER_TARGET,
            text_len = text.len(),
            tree_len = self.json.len(),
            "loading pre-serialised tree"
        );
        parse_tree_json(&self.json)
    }
}
