//! LSP-encoded output.

use lsp_types::{PositionEncodingKind, SemanticTokens, SemanticTokensLegend};
use serde::Serialize;
use tinct_core::SemanticToken;
use tinct_lsp::{PositionEncoding, SemanticTokensEncoder, legend};

/// Semantic tokens together with what a client needs to decode them.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LspDocument {
    legend: SemanticTokensLegend,
    position_encoding: PositionEncodingKind,
    #[serde(flatten)]
    tokens: SemanticTokens,
}

impl LspDocument {
    pub(crate) fn new(text: &str, encoding: PositionEncoding, tokens: &[SemanticToken]) -> Self {
        Self {
            legend: legend(),
            position_encoding: encoding.kind(),
            tokens: SemanticTokensEncoder::new(text, encoding).encode(tokens),
        }
    }
}
