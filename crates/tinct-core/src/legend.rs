//! The fixed token vocabularies and their integer encodings.
//!
//! Hosts and the classifier must agree on these tables byte-for-byte: a
//! transport encodes categories as indices into [`CATEGORIES`] and modifier
//! sets as bitmasks over [`MODIFIERS`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic category of a highlighted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenCategory {
    /// Comment text.
    Comment,
    /// String and character literals.
    String,
    /// Reserved words and modifier keywords.
    Keyword,
    /// Numeric literals.
    Number,
    /// Regular expression literals.
    Regexp,
    /// Operators.
    Operator,
    /// Package and import path segments.
    Namespace,
    /// Type names.
    Type,
    /// Struct names.
    Struct,
    /// Class and object names.
    Class,
    /// Interface-like type references and imported symbols.
    Interface,
    /// Enum names.
    Enum,
    /// Type parameters.
    TypeParameter,
    /// Free functions.
    Function,
    /// Methods.
    Method,
    /// Annotations.
    Decorator,
    /// Macros.
    Macro,
    /// Local and member variables.
    Variable,
    /// Function and constructor parameters.
    Parameter,
    /// Selected members.
    Property,
    /// Labels.
    Label,
    /// Import statements.
    Import,
}

/// Categories in their normative transport order.
pub const CATEGORIES: [TokenCategory; 22] = [
    TokenCategory::Comment,
    TokenCategory::String,
    TokenCategory::Keyword,
    TokenCategory::Number,
    TokenCategory::Regexp,
    TokenCategory::Operator,
    TokenCategory::Namespace,
    TokenCategory::Type,
    TokenCategory::Struct,
    TokenCategory::Class,
    TokenCategory::Interface,
    TokenCategory::Enum,
    TokenCategory::TypeParameter,
    TokenCategory::Function,
    TokenCategory::Method,
    TokenCategory::Decorator,
    TokenCategory::Macro,
    TokenCategory::Variable,
    TokenCategory::Parameter,
    TokenCategory::Property,
    TokenCategory::Label,
    TokenCategory::Import,
];

impl TokenCategory {
    /// Returns the legend name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::String => "string",
            Self::Keyword => "keyword",
            Self::Number => "number",
            Self::Regexp => "regexp",
            Self::Operator => "operator",
            Self::Namespace => "namespace",
            Self::Type => "type",
            Self::Struct => "struct",
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::TypeParameter => "typeParameter",
            Self::Function => "function",
            Self::Method => "method",
            Self::Decorator => "decorator",
            Self::Macro => "macro",
            Self::Variable => "variable",
            Self::Parameter => "parameter",
            Self::Property => "property",
            Self::Label => "label",
            Self::Import => "import",
        }
    }

    /// Returns the category's index in [`CATEGORIES`].
    #[must_use]
    pub const fn index(self) -> u32 {
        // Declaration order matches `CATEGORIES`.
        self as u32
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when a vocabulary name is not recognised.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {vocabulary} name: '{name}'")]
pub struct UnknownNameError {
    vocabulary: &'static str,
    name: String,
}

impl UnknownNameError {
    /// Returns the input that failed to parse.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for TokenCategory {
    type Err = UnknownNameError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        CATEGORIES
            .into_iter()
            .find(|category| category.as_str() == input)
            .ok_or_else(|| UnknownNameError {
                vocabulary: "category",
                name: input.to_owned(),
            })
    }
}

/// Orthogonal attribute attached to a highlighted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenModifier {
    /// The span declares the symbol.
    Declaration,
    /// The span is documentation.
    Documentation,
    /// The symbol is read-only.
    Readonly,
    /// The symbol is static.
    Static,
    /// The symbol is abstract.
    Abstract,
    /// The symbol is deprecated.
    Deprecated,
    /// The span mutates the symbol.
    Modification,
    /// The symbol is asynchronous.
    Async,
}

/// Modifiers in their normative bit order.
pub const MODIFIERS: [TokenModifier; 8] = [
    TokenModifier::Declaration,
    TokenModifier::Documentation,
    TokenModifier::Readonly,
    TokenModifier::Static,
    TokenModifier::Abstract,
    TokenModifier::Deprecated,
    TokenModifier::Modification,
    TokenModifier::Async,
];

impl TokenModifier {
    /// Returns the legend name of the modifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Declaration => "declaration",
            Self::Documentation => "documentation",
            Self::Readonly => "readonly",
            Self::Static => "static",
            Self::Abstract => "abstract",
            Self::Deprecated => "deprecated",
            Self::Modification => "modification",
            Self::Async => "async",
        }
    }

    /// Returns the modifier's bit position in [`MODIFIERS`].
    #[must_use]
    pub const fn index(self) -> u32 {
        self as u32
    }

    /// Returns the modifier's single-bit mask.
    #[must_use]
    pub const fn bit(self) -> u32 {
        1 << self.index()
    }
}

impl fmt::Display for TokenModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenModifier {
    type Err = UnknownNameError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        MODIFIERS
            .into_iter()
            .find(|modifier| modifier.as_str() == input)
            .ok_or_else(|| UnknownNameError {
                vocabulary: "modifier",
                name: input.to_owned(),
            })
    }
}

/// A set of [`TokenModifier`]s.
///
/// Serialises as a list of modifier names in bit order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<TokenModifier>", from = "Vec<TokenModifier>")]
pub struct ModifierSet(u8);

impl ModifierSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Returns a set holding only `modifier`.
    #[must_use]
    pub const fn only(modifier: TokenModifier) -> Self {
        Self::EMPTY.with(modifier)
    }

    /// Returns a copy of the set with `modifier` added.
    #[must_use]
    pub const fn with(self, modifier: TokenModifier) -> Self {
        // Eight modifiers fit a byte exactly.
        Self(self.0 | (1 << modifier.index()))
    }

    /// Adds `modifier` to the set.
    pub const fn insert(&mut self, modifier: TokenModifier) {
        *self = self.with(modifier);
    }

    /// Returns whether `modifier` is in the set.
    #[must_use]
    pub const fn contains(self, modifier: TokenModifier) -> bool {
        self.0 & (1 << modifier.index()) != 0
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the transport bitmask of the set.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0 as u32
    }

    /// Iterates over the members in bit order.
    pub fn iter(self) -> impl Iterator<Item = TokenModifier> {
        MODIFIERS
            .into_iter()
            .filter(move |modifier| self.contains(*modifier))
    }
}

impl FromIterator<TokenModifier> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = TokenModifier>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl From<Vec<TokenModifier>> for ModifierSet {
    fn from(modifiers: Vec<TokenModifier>) -> Self {
        modifiers.into_iter().collect()
    }
}

impl From<ModifierSet> for Vec<TokenModifier> {
    fn from(set: ModifierSet) -> Self {
        set.iter().collect()
    }
}

/// Index reported for category names outside [`CATEGORIES`]: the table
/// length plus two.
pub const UNKNOWN_CATEGORY_INDEX: u32 = 24;

/// Bit set for modifier names outside [`MODIFIERS`]: the bit two past the
/// last table entry.
pub const UNKNOWN_MODIFIER_BIT: u32 = 1 << 10;

/// Encodes a category name as its transport index.
///
/// Unknown names map to [`UNKNOWN_CATEGORY_INDEX`] instead of failing.
///
/// # Example
///
/// ```
/// use tinct_core::encode_category;
///
/// assert_eq!(encode_category("keyword"), 2);
/// assert_eq!(encode_category("bogus"), 24);
/// ```
#[must_use]
pub fn encode_category(name: &str) -> u32 {
    name.parse::<TokenCategory>()
        .map_or(UNKNOWN_CATEGORY_INDEX, TokenCategory::index)
}

/// Encodes a collection of modifier names as a transport bitmask.
///
/// Each unknown name sets [`UNKNOWN_MODIFIER_BIT`] instead of failing.
///
/// # Example
///
/// ```
/// use tinct_core::encode_modifiers;
///
/// assert_eq!(encode_modifiers(["declaration", "abstract"]), 0b1_0001);
/// assert_eq!(encode_modifiers(["bogus"]), 1 << 10);
/// ```
#[must_use]
pub fn encode_modifiers<'a, I>(names: I) -> u32
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().fold(0, |mask, name| {
        mask | name
            .parse::<TokenModifier>()
            .map_or(UNKNOWN_MODIFIER_BIT, TokenModifier::bit)
    })
}
