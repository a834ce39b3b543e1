//! Syntax tree model consumed by the classifier.
//!
//! Trees are produced by an external parser and arrive as scalameta-style
//! JSON: every node is an object whose `"type"` field names the grammar
//! production (`"Defn.Class"`, `"Term.Name"`, ...) and whose `"pos"` field
//! holds absolute byte offsets. Only the fields the classifier reads are
//! modelled; anything else in the input is ignored, and unrecognised tags
//! deserialise to [`Node::Unknown`].

use serde::{Deserialize, Serialize};

/// Absolute byte range of a node (`end` is exclusive).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    /// Offset of the node's first byte.
    pub start: u32,
    /// Offset one past the node's last byte.
    pub end: u32,
}

impl Pos {
    /// Creates a range from `start` to `end`.
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns the byte length of the range.
    pub(crate) const fn len(self) -> u32 {
        self.end.saturating_sub(self.start)
    }
}

/// An identifier and where it starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    /// Position of the identifier.
    pub pos: Pos,
    /// Identifier text as written, without backquotes.
    pub value: String,
}

impl Name {
    /// Creates a name starting at `start`.
    #[must_use]
    pub fn new(start: u32, value: impl Into<String>) -> Self {
        let text = value.into();
        let end = start.saturating_add(crate::position::clamp_u32(text.len()));
        Self {
            pos: Pos::new(start, end),
            value: text,
        }
    }
}

/// Modifier attached to a definition or parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Modifier {
    /// `sealed`
    #[serde(rename = "Mod.Sealed")]
    Sealed {
        /// Position of the keyword.
        pos: Pos,
    },
    /// `abstract`
    #[serde(rename = "Mod.Abstract")]
    Abstract {
        /// Position of the keyword.
        pos: Pos,
    },
    /// `case`
    #[serde(rename = "Mod.Case")]
    Case {
        /// Position of the keyword.
        pos: Pos,
    },
    /// `final`
    #[serde(rename = "Mod.Final")]
    Final {
        /// Position of the keyword.
        pos: Pos,
    },
    /// `implicit`
    #[serde(rename = "Mod.Implicit")]
    Implicit {
        /// Position of the keyword.
        pos: Pos,
    },
    /// `lazy`
    #[serde(rename = "Mod.Lazy")]
    Lazy {
        /// Position of the keyword.
        pos: Pos,
    },
    /// `override`
    #[serde(rename = "Mod.Override")]
    Override {
        /// Position of the keyword.
        pos: Pos,
    },
    /// `private`
    #[serde(rename = "Mod.Private")]
    Private {
        /// Position of the keyword.
        pos: Pos,
    },
    /// `protected`
    #[serde(rename = "Mod.Protected")]
    Protected {
        /// Position of the keyword.
        pos: Pos,
    },
    /// `val` on a class parameter.
    #[serde(rename = "Mod.ValParam")]
    ValParam {
        /// Position of the keyword.
        pos: Pos,
    },
    /// `var` on a class parameter.
    #[serde(rename = "Mod.VarParam")]
    VarParam {
        /// Position of the keyword.
        pos: Pos,
    },
    /// `@annotation`, which contributes no keyword but still precedes
    /// the definition keyword.
    #[serde(rename = "Mod.Annot")]
    Annot {
        /// Position from `@` to the end of the annotation.
        pos: Pos,
    },
    /// Any modifier without a keyword rule (`inline`, `opaque`, ...).
    #[serde(other)]
    Unknown,
}

impl Modifier {
    /// Returns the keyword spelling and position, if the modifier has one.
    #[must_use]
    pub const fn keyword(&self) -> Option<(&'static str, Pos)> {
        match self {
            Self::Sealed { pos } => Some(("sealed", *pos)),
            Self::Abstract { pos } => Some(("abstract", *pos)),
            Self::Case { pos } => Some(("case", *pos)),
            Self::Final { pos } => Some(("final", *pos)),
            Self::Implicit { pos } => Some(("implicit", *pos)),
            Self::Lazy { pos } => Some(("lazy", *pos)),
            Self::Override { pos } => Some(("override", *pos)),
            Self::Private { pos } => Some(("private", *pos)),
            Self::Protected { pos } => Some(("protected", *pos)),
            Self::ValParam { pos } => Some(("val", *pos)),
            Self::VarParam { pos } => Some(("var", *pos)),
            Self::Annot { .. } | Self::Unknown => None,
        }
    }

    /// Returns the position of the modifier, if known.
    #[must_use]
    pub const fn pos(&self) -> Option<Pos> {
        match self {
            Self::Annot { pos } => Some(*pos),
            other => match other.keyword() {
                Some((_, pos)) => Some(pos),
                None => None,
            },
        }
    }
}

/// Class, object, and trait definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDefn {
    /// Position of the whole definition.
    pub pos: Pos,
    /// Modifiers in source order.
    #[serde(default)]
    pub mods: Vec<Modifier>,
    /// Defined name.
    pub name: Name,
    /// Primary constructor; absent for objects.
    pub ctor: Option<Ctor>,
    /// Inheritance clause and body.
    pub template: Option<Template>,
}

/// Primary constructor of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ctor {
    /// Position of the constructor.
    pub pos: Pos,
    /// Parameter lists in source order.
    #[serde(default)]
    pub param_lists: Vec<Vec<Node>>,
}

/// Inheritance clause plus body statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Position of the template.
    pub pos: Pos,
    /// Parent initialisers (`extends A("x") with B`).
    #[serde(default)]
    pub inits: Vec<Init>,
    /// Body statements.
    #[serde(default)]
    pub stats: Vec<Node>,
}

/// A parent type together with its constructor arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Init {
    /// Position of the initialiser.
    pub pos: Pos,
    /// The parent type reference.
    pub tpe: Box<Node>,
    /// Constructor argument lists.
    #[serde(default)]
    pub arg_lists: Vec<Vec<Node>>,
}

/// `import a.b.{C, D => E, _}` and friends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Import {
    /// Position of the statement, starting at the `import` keyword.
    pub pos: Pos,
    /// One importer per comma-separated clause.
    #[serde(default)]
    pub importers: Vec<Importer>,
}

/// A qualifying path and the symbols imported from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Importer {
    /// Position of the clause.
    pub pos: Pos,
    /// The qualifying path (`Term.Name` or `Term.Select`).
    pub reference: Box<Node>,
    /// The imported symbols.
    #[serde(default)]
    pub importees: Vec<Importee>,
}

/// One symbol in an import clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Importee {
    /// `C`
    #[serde(rename = "Importee.Name")]
    Name {
        /// Position of the importee.
        pos: Pos,
        /// Imported symbol.
        name: Name,
    },
    /// `D => E`
    #[serde(rename = "Importee.Rename")]
    Rename {
        /// Position of the importee.
        pos: Pos,
        /// Imported symbol.
        name: Name,
        /// Local alias.
        rename: Name,
    },
    /// `F => _`
    #[serde(rename = "Importee.Unimport")]
    Unimport {
        /// Position of the importee.
        pos: Pos,
        /// Hidden symbol.
        name: Name,
    },
    /// `_`
    #[serde(rename = "Importee.Wildcard")]
    Wildcard {
        /// Position of the wildcard.
        pos: Pos,
    },
    /// Importee shapes without a highlighting rule.
    #[serde(other)]
    Unknown,
}

/// `package a.b { ... }` or a file-level package clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pkg {
    /// Position of the clause, starting at the `package` keyword.
    pub pos: Pos,
    /// The package path.
    pub reference: Box<Node>,
    /// Statements inside the package.
    #[serde(default)]
    pub stats: Vec<Node>,
}

/// `val` and `var` definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueDefn {
    /// Position of the definition.
    pub pos: Pos,
    /// Modifiers in source order.
    #[serde(default)]
    pub mods: Vec<Modifier>,
    /// Bound patterns.
    #[serde(default)]
    pub pats: Vec<Node>,
    /// Declared type.
    pub decltpe: Option<Box<Node>>,
    /// Right-hand side; absent for an uninitialised `var`.
    pub rhs: Option<Box<Node>>,
}

/// `def` definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefDefn {
    /// Position of the definition.
    pub pos: Pos,
    /// Modifiers in source order.
    #[serde(default)]
    pub mods: Vec<Modifier>,
    /// Method name.
    pub name: Name,
    /// Parameter lists in source order.
    #[serde(default)]
    pub param_lists: Vec<Vec<Node>>,
    /// Declared result type.
    pub decltpe: Option<Box<Node>>,
    /// Method body.
    pub body: Option<Box<Node>>,
}

/// A term parameter of a method or constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    /// Position of the parameter.
    pub pos: Pos,
    /// Modifiers in source order.
    #[serde(default)]
    pub mods: Vec<Modifier>,
    /// Parameter name.
    pub name: Name,
    /// Declared type.
    pub decltpe: Option<Box<Node>>,
    /// Default value.
    pub default: Option<Box<Node>>,
}

/// A syntax tree node.
///
/// The variant set is closed; see the module documentation for the wire
/// format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Root of a compilation unit.
    #[serde(rename = "Source")]
    Source {
        /// Position of the document.
        pos: Pos,
        /// Top-level statements.
        #[serde(default)]
        stats: Vec<Self>,
    },
    /// Package clause.
    #[serde(rename = "Pkg")]
    Pkg(Pkg),
    /// Import statement.
    #[serde(rename = "Import")]
    Import(Import),
    /// Class definition.
    #[serde(rename = "Defn.Class")]
    Class(TypeDefn),
    /// Object definition.
    #[serde(rename = "Defn.Object")]
    Object(TypeDefn),
    /// Trait definition.
    #[serde(rename = "Defn.Trait")]
    Trait(TypeDefn),
    /// `val` definition.
    #[serde(rename = "Defn.Val")]
    Val(ValueDefn),
    /// `var` definition.
    #[serde(rename = "Defn.Var")]
    Var(ValueDefn),
    /// `def` definition.
    #[serde(rename = "Defn.Def")]
    Def(DefDefn),
    /// Term parameter.
    #[serde(rename = "Term.Param")]
    Param(Param),
    /// Simple term name.
    #[serde(rename = "Term.Name")]
    TermName(Name),
    /// `qual.name` in term position.
    #[serde(rename = "Term.Select")]
    TermSelect {
        /// Position of the selection.
        pos: Pos,
        /// Qualifier expression.
        qual: Box<Self>,
        /// Selected name.
        name: Name,
    },
    /// Function application `fun(args)`.
    #[serde(rename = "Term.Apply")]
    Apply {
        /// Position of the application.
        pos: Pos,
        /// Applied function.
        fun: Box<Self>,
        /// Arguments.
        #[serde(default)]
        args: Vec<Self>,
    },
    /// `{ stats }`
    #[serde(rename = "Term.Block")]
    Block {
        /// Position of the block.
        pos: Pos,
        /// Statements.
        #[serde(default)]
        stats: Vec<Self>,
    },
    /// Simple type name.
    #[serde(rename = "Type.Name")]
    TypeName(Name),
    /// `qual.Name` in type position.
    #[serde(rename = "Type.Select")]
    TypeSelect {
        /// Position of the selection.
        pos: Pos,
        /// Qualifier path.
        qual: Box<Self>,
        /// Selected type name.
        name: Name,
    },
    /// Type application `F[A, B]`.
    #[serde(rename = "Type.Apply")]
    TypeApply {
        /// Position of the application.
        pos: Pos,
        /// Type constructor.
        tpe: Box<Self>,
        /// Type arguments.
        #[serde(default)]
        args: Vec<Self>,
    },
    /// Variable pattern binding a name.
    #[serde(rename = "Pat.Var")]
    PatVar {
        /// Position of the pattern.
        pos: Pos,
        /// Bound name.
        name: Name,
    },
    /// Integer literal.
    #[serde(rename = "Lit.Int")]
    LitInt {
        /// Position of the literal's surface syntax.
        pos: Pos,
    },
    /// Long literal.
    #[serde(rename = "Lit.Long")]
    LitLong {
        /// Position of the literal's surface syntax.
        pos: Pos,
    },
    /// Double literal.
    #[serde(rename = "Lit.Double")]
    LitDouble {
        /// Position of the literal's surface syntax.
        pos: Pos,
    },
    /// Float literal.
    #[serde(rename = "Lit.Float")]
    LitFloat {
        /// Position of the literal's surface syntax.
        pos: Pos,
    },
    /// String literal, quotes included.
    #[serde(rename = "Lit.String")]
    LitString {
        /// Position of the literal's surface syntax.
        pos: Pos,
    },
    /// Character literal, quotes included.
    #[serde(rename = "Lit.Char")]
    LitChar {
        /// Position of the literal's surface syntax.
        pos: Pos,
    },
    /// `true` or `false`.
    #[serde(rename = "Lit.Boolean")]
    LitBoolean {
        /// Position of the literal's surface syntax.
        pos: Pos,
    },
    /// `null`
    #[serde(rename = "Lit.Null")]
    LitNull {
        /// Position of the literal's surface syntax.
        pos: Pos,
    },
    /// Any production without a highlighting rule.
    #[serde(other)]
    Unknown,
}

impl Node {
    /// Returns the wire tag of the node.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Source { .. } => "Source",
            Self::Pkg(_) => "Pkg",
            Self::Import(_) => "Import",
            Self::Class(_) => "Defn.Class",
            Self::Object(_) => "Defn.Object",
            Self::Trait(_) => "Defn.Trait",
            Self::Val(_) => "Defn.Val",
            Self::Var(_) => "Defn.Var",
            Self::Def(_) => "Defn.Def",
            Self::Param(_) => "Term.Param",
            Self::TermName(_) => "Term.Name",
            Self::TermSelect { .. } => "Term.Select",
            Self::Apply { .. } => "Term.Apply",
            Self::Block { .. } => "Term.Block",
            Self::TypeName(_) => "Type.Name",
            Self::TypeSelect { .. } => "Type.Select",
            Self::TypeApply { .. } => "Type.Apply",
            Self::PatVar { .. } => "Pat.Var",
            Self::LitInt { .. } => "Lit.Int",
            Self::LitLong { .. } => "Lit.Long",
            Self::LitDouble { .. } => "Lit.Double",
            Self::LitFloat { .. } => "Lit.Float",
            Self::LitString { .. } => "Lit.String",
            Self::LitChar { .. } => "Lit.Char",
            Self::LitBoolean { .. } => "Lit.Boolean",
            Self::LitNull { .. } => "Lit.Null",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns the node's position, or `None` for [`Node::Unknown`].
    #[must_use]
    pub const fn pos(&self) -> Option<Pos> {
        match self {
            Self::Source { pos, .. }
            | Self::TermSelect { pos, .. }
            | Self::Apply { pos, .. }
            | Self::Block { pos, .. }
            | Self::TypeSelect { pos, .. }
            | Self::TypeApply { pos, .. }
            | Self::PatVar { pos, .. }
            | Self::LitInt { pos }
            | Self::LitLong { pos }
            | Self::LitDouble { pos }
            | Self::LitFloat { pos }
            | Self::LitString { pos }
            | Self::LitChar { pos }
            | Self::LitBoolean { pos }
            | Self::LitNull { pos } => Some(*pos),
            Self::Pkg(pkg) => Some(pkg.pos),
            Self::Import(import) => Some(import.pos),
            Self::Class(defn) | Self::Object(defn) | Self::Trait(defn) => Some(defn.pos),
            Self::Val(defn) | Self::Var(defn) => Some(defn.pos),
            Self::Def(defn) => Some(defn.pos),
            Self::Param(param) => Some(param.pos),
            Self::TermName(name) | Self::TypeName(name) => Some(name.pos),
            Self::Unknown => None,
        }
    }

    /// Returns the statements of a [`Node::Source`] root, or the node itself.
    #[must_use]
    pub fn top_level(&self) -> &[Self] {
        match self {
            Self::Source { stats, .. } => stats,
            other => std::slice::from_ref(other),
        }
    }
}
