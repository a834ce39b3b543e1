//! Accumulation of emitted spans.

use serde::{Deserialize, Serialize};

use crate::legend::{ModifierSet, TokenCategory};
use crate::position::Position;

/// A classified, positioned span of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SemanticToken {
    /// Zero-indexed line of the first byte.
    pub line: u32,
    /// Zero-indexed byte column of the first byte.
    pub column: u32,
    /// Byte length of the labelled text.
    pub length: u32,
    /// Semantic category.
    pub category: TokenCategory,
    /// Attached modifiers.
    #[serde(default)]
    pub modifiers: ModifierSet,
}

impl SemanticToken {
    /// Creates a token at `position`.
    #[must_use]
    pub const fn new(
        position: Position,
        length: u32,
        category: TokenCategory,
        modifiers: ModifierSet,
    ) -> Self {
        Self {
            line: position.line,
            column: position.column,
            length,
            category,
            modifiers,
        }
    }

    /// Returns the start position of the token.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

/// Ordered sink for tokens in visitation order.
///
/// Tokens are neither deduplicated, sorted, nor filtered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanCollector {
    tokens: Vec<SemanticToken>,
}

impl SpanCollector {
    /// Creates an empty collector.
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Appends a token.
    pub fn push(&mut self, token: SemanticToken) {
        self.tokens.push(token);
    }

    /// Returns the number of collected tokens.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns whether nothing has been collected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates over the tokens collected so far.
    pub fn iter(&self) -> std::slice::Iter<'_, SemanticToken> {
        self.tokens.iter()
    }

    /// Consumes the collector and returns the span stream.
    #[must_use]
    pub fn finish(self) -> Vec<SemanticToken> {
        self.tokens
    }
}
