//! Tests for legend construction.

use lsp_types::{SemanticTokensFullOptions, SemanticTokensServerCapabilities};
use tinct_core::{CATEGORIES, MODIFIERS, TokenCategory, TokenModifier};

use crate::{legend, server_capabilities};

#[test]
fn legend_follows_vocabulary_order() {
    let legend = legend();

    let types: Vec<_> = legend.token_types.iter().map(|t| t.as_str()).collect();
    let categories: Vec<_> = CATEGORIES.iter().map(|c| c.as_str()).collect();
    assert_eq!(types, categories);

    let modifiers: Vec<_> = legend.token_modifiers.iter().map(|m| m.as_str()).collect();
    let expected: Vec<_> = MODIFIERS.iter().map(|m| m.as_str()).collect();
    assert_eq!(modifiers, expected);
}

#[test]
fn legend_positions_match_encoded_indices() {
    let legend = legend();
    let class_slot = legend
        .token_types
        .iter()
        .position(|t| t.as_str() == "class")
        .and_then(|index| u32::try_from(index).ok());
    assert_eq!(class_slot, Some(TokenCategory::Class.index()));

    let declaration_slot = legend
        .token_modifiers
        .iter()
        .position(|m| m.as_str() == "declaration")
        .and_then(|index| u32::try_from(index).ok());
    assert_eq!(declaration_slot, Some(TokenModifier::Declaration.index()));
}

#[test]
fn capabilities_offer_full_documents_only() {
    let SemanticTokensServerCapabilities::SemanticTokensOptions(options) = server_capabilities()
    else {
        panic!("expected plain semantic token options");
    };
    assert_eq!(options.full, Some(SemanticTokensFullOptions::Bool(true)));
    assert_eq!(options.range, Some(false));
    assert_eq!(options.legend, legend());
}
