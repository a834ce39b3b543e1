//! Legend and capability advertisement.

use lsp_types::{
    SemanticTokenModifier, SemanticTokenType, SemanticTokensFullOptions, SemanticTokensLegend,
    SemanticTokensOptions, SemanticTokensServerCapabilities,
};
use tinct_core::{CATEGORIES, MODIFIERS};

/// Semantic token legend advertised to clients.
///
/// Token types and modifiers appear in vocabulary order, so a token's
/// `token_type` is its category index and its modifier bitset is the
/// core's modifier mask.
#[must_use]
pub fn legend() -> SemanticTokensLegend {
    SemanticTokensLegend {
        token_types: CATEGORIES
            .iter()
            .map(|category| SemanticTokenType::new(category.as_str()))
            .collect(),
        token_modifiers: MODIFIERS
            .iter()
            .map(|modifier| SemanticTokenModifier::new(modifier.as_str()))
            .collect(),
    }
}

/// Semantic token capability for full-document requests.
#[must_use]
pub fn server_capabilities() -> SemanticTokensServerCapabilities {
    SemanticTokensServerCapabilities::SemanticTokensOptions(SemanticTokensOptions {
        legend: legend(),
        full: Some(SemanticTokensFullOptions::Bool(true)),
        range: Some(false),
        ..SemanticTokensOptions::default()
    })
}
