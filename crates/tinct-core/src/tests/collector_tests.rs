//! Tests for [`SpanCollector`].

use crate::{ModifierSet, Position, SemanticToken, SpanCollector, TokenCategory, TokenModifier};

fn at(line: u32, column: u32, category: TokenCategory) -> SemanticToken {
    SemanticToken::new(Position::new(line, column), 3, category, ModifierSet::EMPTY)
}

#[test]
fn keeps_visitation_order_and_duplicates() {
    let mut collector = SpanCollector::new();
    assert!(collector.is_empty());

    let later = at(2, 4, TokenCategory::Keyword);
    let earlier = at(0, 1, TokenCategory::Variable);
    collector.push(later);
    collector.push(earlier);
    collector.push(later);

    assert_eq!(collector.len(), 3);
    assert_eq!(collector.iter().next(), Some(&later));
    assert_eq!(collector.finish(), [later, earlier, later]);
}

#[test]
fn tokens_expose_their_start() {
    let token = SemanticToken::new(
        Position::new(4, 9),
        5,
        TokenCategory::Class,
        ModifierSet::only(TokenModifier::Declaration),
    );

    assert_eq!(token.position(), Position::new(4, 9));
    assert!(token.modifiers.contains(TokenModifier::Declaration));
}
