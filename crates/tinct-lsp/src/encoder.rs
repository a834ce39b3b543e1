//! Relative encoding of span streams.

use lsp_types::{SemanticToken as LspToken, SemanticTokens};
use tinct_core::{LineTable, Position, SemanticToken};
use tracing::{debug, trace};

use crate::encoding::PositionEncoding;

/// Log target for token encoding.
const ENCODER_TARGET: &str = "tinct_lsp::encoder";

/// Converts span streams for one document into LSP semantic tokens.
///
/// Relative encoding cannot move backwards, so tokens are stable-sorted by
/// position first. Tokens that run past the end of their line (multi-line
/// string literals) are split into one token per line, since the legend
/// does not advertise multiline support. Columns and lengths are then
/// converted to the negotiated [`PositionEncoding`] against each line.
#[derive(Debug, Clone)]
pub struct SemanticTokensEncoder<'a> {
    text: &'a str,
    lines: LineTable,
    encoding: PositionEncoding,
}

impl<'a> SemanticTokensEncoder<'a> {
    /// Creates an encoder for `text`.
    #[must_use]
    pub fn new(text: &'a str, encoding: PositionEncoding) -> Self {
        Self {
            text,
            lines: LineTable::build(text),
            encoding,
        }
    }

    /// Returns the column unit in use.
    #[must_use]
    pub const fn encoding(&self) -> PositionEncoding {
        self.encoding
    }

    /// Encodes `tokens` as a full-document response.
    #[must_use]
    pub fn encode(&self, tokens: &[SemanticToken]) -> SemanticTokens {
        let mut ordered = Vec::with_capacity(tokens.len());
        for token in tokens {
            self.split_lines(token, &mut ordered);
        }
        ordered.sort_by_key(SemanticToken::position);

        let mut data = Vec::with_capacity(ordered.len());
        let mut previous = Position::new(0, 0);
        for token in &ordered {
            let (column, length) = self.units(token);
            let delta_line = token.line.saturating_sub(previous.line);
            let delta_start = if delta_line == 0 {
                column.saturating_sub(previous.column)
            } else {
                column
            };
            data.push(LspToken {
                delta_line,
                delta_start,
                length,
                token_type: token.category.index(),
                token_modifiers_bitset: token.modifiers.bits(),
            });
            previous = Position::new(token.line, column);
        }

        debug!(
            target: ENCODER_TARGET,
            tokens = data.len(),
            encoding = %self.encoding,
            "encoded semantic tokens"
        );
        SemanticTokens {
            result_id: None,
            data,
        }
    }

    /// Pushes the single-line pieces of `token` onto `pieces`.
    fn split_lines(&self, token: &SemanticToken, pieces: &mut Vec<SemanticToken>) {
        let mut line = token.line;
        let mut column = token.column;
        let mut remaining = token.length;

        while remaining > 0 {
            let piece = |at_line: u32, at_column: u32, length: u32| SemanticToken {
                line: at_line,
                column: at_column,
                length,
                ..*token
            };
            let (Some(content), Some(width)) = (
                self.lines.line_text(self.text, line),
                self.line_width(line),
            ) else {
                pieces.push(piece(line, column, remaining));
                return;
            };
            let available = clamp_len(content.len()).saturating_sub(column);
            if remaining <= available {
                pieces.push(piece(line, column, remaining));
                return;
            }
            if available > 0 {
                pieces.push(piece(line, column, available));
            }
            remaining = remaining.saturating_sub(width.saturating_sub(column));
            line = line.saturating_add(1);
            column = 0;
        }
    }

    fn line_width(&self, line: u32) -> Option<u32> {
        self.lines
            .widths()
            .get(usize::try_from(line).ok()?)
            .copied()
    }

    fn units(&self, token: &SemanticToken) -> (u32, u32) {
        match self.encoding {
            PositionEncoding::Utf8 => (token.column, token.length),
            PositionEncoding::Utf16 => self.utf16_units(token).unwrap_or_else(|| {
                trace!(
                    target: ENCODER_TARGET,
                    line = token.line,
                    column = token.column,
                    "token splits a character; keeping byte units"
                );
                (token.column, token.length)
            }),
        }
    }

    fn utf16_units(&self, token: &SemanticToken) -> Option<(u32, u32)> {
        let line = self.lines.line_text(self.text, token.line)?;
        let start = usize::try_from(token.column).ok()?;
        let end = start.checked_add(usize::try_from(token.length).ok()?)?;
        let before = line.get(..start)?;
        let inside = line.get(start..end)?;
        Some((utf16_len(before), utf16_len(inside)))
    }
}

fn utf16_len(text: &str) -> u32 {
    clamp_len(text.encode_utf16().count())
}

fn clamp_len(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
