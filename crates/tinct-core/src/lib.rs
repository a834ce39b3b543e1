//! Semantic highlighting for Scala syntax trees.
//!
//! This crate turns a parsed document into a flat stream of highlighted
//! spans. It provides:
//!
//! - **Position indexing** via [`LineTable`], which maps absolute byte
//!   offsets to zero-based line/column pairs
//! - **Classification** via [`Classifier`], a pre-order walk over the closed
//!   [`Node`] model that decides which spans each construct contributes
//! - **Collection** via [`SpanCollector`], the ordered output sink
//! - **Vocabularies** ([`CATEGORIES`], [`MODIFIERS`]) and their total
//!   transport encoders [`encode_category`] and [`encode_modifiers`]
//!
//! Parsing is someone else's job. Trees come from a [`TreeParser`], most
//! often [`JsonTreeParser`] fed with a scalameta-style JSON dump.
//!
//! # Example
//!
//! ```
//! use tinct_core::{HighlightOptions, JsonTreeParser, TokenCategory, highlight};
//!
//! let text = "import pkg.Name";
//! let parser = JsonTreeParser::new(r#"{
//!     "type": "Import",
//!     "pos": {"start": 0, "end": 15},
//!     "importers": [{
//!         "pos": {"start": 7, "end": 15},
//!         "reference": {"type": "Term.Name", "pos": {"start": 7, "end": 10}, "value": "pkg"},
//!         "importees": [{
//!             "type": "Importee.Name",
//!             "pos": {"start": 11, "end": 15},
//!             "name": {"pos": {"start": 11, "end": 15}, "value": "Name"}
//!         }]
//!     }]
//! }"#);
//!
//! let tokens = highlight(text, &parser, &HighlightOptions::default())?;
//! let categories: Vec<_> = tokens.iter().map(|t| t.category).collect();
//! assert_eq!(
//!     categories,
//!     [TokenCategory::Keyword, TokenCategory::Interface, TokenCategory::Namespace]
//! );
//! # Ok::<(), tinct_core::ParseError>(())
//! ```

mod ast;
mod classifier;
mod collector;
mod error;
mod highlight;
mod legend;
mod options;
mod parser;
mod position;

pub use ast::{
    Ctor, DefDefn, Import, Importee, Importer, Init, Modifier, Name, Node, Param, Pkg, Pos,
    Template, TypeDefn, ValueDefn,
};
pub use classifier::{Classifier, classify_tree};
pub use collector::{SemanticToken, SpanCollector};
pub use error::ParseError;
pub use highlight::{highlight, highlight_tree};
pub use legend::{
    CATEGORIES, MODIFIERS, ModifierSet, TokenCategory, TokenModifier, UNKNOWN_CATEGORY_INDEX,
    UNKNOWN_MODIFIER_BIT, UnknownNameError, encode_category, encode_modifiers,
};
pub use options::{HighlightOptions, TokenOrdering, TokenOrderingParseError};
pub use parser::{JsonTreeParser, TreeParser, parse_tree_json};
pub use position::{LineTable, Position};

#[cfg(test)]
mod tests;
