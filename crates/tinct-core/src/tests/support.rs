//! Tree builders that locate identifiers by searching the document text.

use crate::{
    ModifierSet, Modifier, Name, Node, Pos, SemanticToken, TokenCategory, TokenModifier, TypeDefn,
};

/// Offset of the `n`th (zero-based) occurrence of `needle` in `text`.
pub(super) fn nth(text: &str, needle: &str, n: usize) -> u32 {
    let offset = text
        .match_indices(needle)
        .nth(n)
        .map(|(index, _)| index)
        .unwrap_or_else(|| panic!("occurrence {n} of {needle:?} not found in {text:?}"));
    u32::try_from(offset).expect("test offsets fit in u32")
}

/// Offset of the first occurrence of `needle` in `text`.
pub(super) fn at(text: &str, needle: &str) -> u32 {
    nth(text, needle, 0)
}

/// Range covering the `n`th occurrence of `needle`.
pub(super) fn span(text: &str, needle: &str, n: usize) -> Pos {
    let start = nth(text, needle, n);
    let len = u32::try_from(needle.len()).expect("needle length fits in u32");
    Pos::new(start, start + len)
}

/// Range covering the whole of `text`.
pub(super) fn whole(text: &str) -> Pos {
    Pos::new(0, u32::try_from(text.len()).expect("text length fits in u32"))
}

pub(super) fn name(text: &str, needle: &str) -> Name {
    Name::new(at(text, needle), needle)
}

pub(super) fn nth_name(text: &str, needle: &str, n: usize) -> Name {
    Name::new(nth(text, needle, n), needle)
}

pub(super) fn term(text: &str, needle: &str) -> Node {
    Node::TermName(name(text, needle))
}

pub(super) fn type_name(text: &str, needle: &str) -> Node {
    Node::TypeName(name(text, needle))
}

pub(super) fn select(qual: Node, name: Name) -> Node {
    let start = qual.pos().map_or(name.pos.start, |pos| pos.start);
    Node::TermSelect {
        pos: Pos::new(start, name.pos.end),
        qual: Box::new(qual),
        name,
    }
}

pub(super) fn string_lit(text: &str, needle: &str) -> Node {
    Node::LitString {
        pos: span(text, needle, 0),
    }
}

pub(super) fn int_lit(text: &str, needle: &str) -> Node {
    Node::LitInt {
        pos: span(text, needle, 0),
    }
}

pub(super) fn modifier(text: &str, keyword: &str) -> Modifier {
    let pos = span(text, keyword, 0);
    match keyword {
        "sealed" => Modifier::Sealed { pos },
        "abstract" => Modifier::Abstract { pos },
        "case" => Modifier::Case { pos },
        "final" => Modifier::Final { pos },
        "implicit" => Modifier::Implicit { pos },
        "lazy" => Modifier::Lazy { pos },
        "override" => Modifier::Override { pos },
        "private" => Modifier::Private { pos },
        "protected" => Modifier::Protected { pos },
        "val" => Modifier::ValParam { pos },
        "var" => Modifier::VarParam { pos },
        other => panic!("no modifier for {other:?}"),
    }
}

/// A class, object, or trait definition with no constructor or template.
pub(super) fn bare_defn(text: &str, defined: &str) -> TypeDefn {
    TypeDefn {
        pos: whole(text),
        mods: Vec::new(),
        name: name(text, defined),
        ctor: None,
        template: None,
    }
}

pub(super) fn source(text: &str, stats: Vec<Node>) -> Node {
    Node::Source {
        pos: whole(text),
        stats,
    }
}

pub(super) fn token(line: u32, column: u32, length: u32, category: TokenCategory) -> SemanticToken {
    SemanticToken {
        line,
        column,
        length,
        category,
        modifiers: ModifierSet::EMPTY,
    }
}

pub(super) fn declaration(
    line: u32,
    column: u32,
    length: u32,
    category: TokenCategory,
) -> SemanticToken {
    SemanticToken {
        modifiers: ModifierSet::only(TokenModifier::Declaration),
        ..token(line, column, length, category)
    }
}
