//! Recursive node classification.
//!
//! [`Classifier`] walks a syntax tree in pre-order and appends one
//! [`SemanticToken`] per highlighted identifier, keyword, or literal. A
//! construct's own tokens (modifiers, keyword, name) are emitted before its
//! nested contents are visited. Productions without a rule produce nothing
//! and never affect their siblings.

use std::collections::BTreeSet;

use tracing::trace;

use crate::ast::{
    DefDefn, Import, Importee, Init, Modifier, Name, Node, Param, Pkg, Pos, Template, TypeDefn,
    ValueDefn,
};
use crate::collector::{SemanticToken, SpanCollector};
use crate::legend::{ModifierSet, TokenCategory, TokenModifier};
use crate::position::{LineTable, clamp_u32};

/// Log target for classification.
const CLASSIFIER_TARGET: &str = "tinct_core::classifier";

/// Tree walker that turns nodes into highlighted spans.
///
/// A classifier borrows the document text and its [`LineTable`] for the
/// duration of one call and owns the [`SpanCollector`] it fills.
#[derive(Debug)]
pub struct Classifier<'a> {
    text: &'a str,
    lines: &'a LineTable,
    collector: SpanCollector,
    /// Offsets of modifier keywords already emitted.
    modifier_starts: BTreeSet<u32>,
}

impl<'a> Classifier<'a> {
    /// Creates a classifier for `text`.
    ///
    /// `lines` must have been built from the same `text`.
    #[must_use]
    pub const fn new(text: &'a str, lines: &'a LineTable) -> Self {
        Self {
            text,
            lines,
            collector: SpanCollector::new(),
            modifier_starts: BTreeSet::new(),
        }
    }

    /// Classifies `node` and everything nested beneath it.
    pub fn classify(&mut self, node: &Node) {
        match node {
            Node::Source { stats, .. } | Node::Block { stats, .. } => self.classify_all(stats),
            Node::Pkg(pkg) => self.classify_pkg(pkg),
            Node::Import(import) => self.classify_import(import),
            Node::Class(defn) | Node::Object(defn) => {
                self.classify_type_defn(defn, TokenCategory::Class);
            }
            Node::Trait(defn) => self.classify_type_defn(defn, TokenCategory::Interface),
            Node::Val(defn) => self.classify_value(defn, "val"),
            Node::Var(defn) => self.classify_value(defn, "var"),
            Node::Def(defn) => self.classify_def(defn),
            Node::Param(param) => self.classify_param(param),
            Node::TermName(name) | Node::PatVar { name, .. } => {
                self.emit_name(name, TokenCategory::Variable, ModifierSet::EMPTY);
            }
            Node::TermSelect { qual, name, .. } => {
                self.classify(qual);
                self.emit_name(name, TokenCategory::Property, ModifierSet::EMPTY);
            }
            Node::Apply { fun, args, .. } => {
                self.classify(fun);
                self.classify_all(args);
            }
            Node::TypeName(_) | Node::TypeSelect { .. } | Node::TypeApply { .. } => {
                self.classify_type(node, TokenCategory::Type);
            }
            Node::LitInt { pos }
            | Node::LitLong { pos }
            | Node::LitDouble { pos }
            | Node::LitFloat { pos } => self.emit_literal(*pos, TokenCategory::Number),
            Node::LitString { pos } | Node::LitChar { pos } => {
                self.emit_literal(*pos, TokenCategory::String);
            }
            Node::LitBoolean { pos } | Node::LitNull { pos } => {
                self.emit_literal(*pos, TokenCategory::Keyword);
            }
            Node::Unknown => {
                trace!(target: CLASSIFIER_TARGET, "skipping node without a highlighting rule");
            }
        }
    }

    /// Classifies `node` as a type reference in `category`.
    ///
    /// Qualified references visit the selected name before the qualifier,
    /// both in the same category. Nodes that cannot name a type are skipped.
    pub fn classify_type(&mut self, node: &Node, category: TokenCategory) {
        match node {
            Node::TypeName(name) | Node::TermName(name) => {
                self.emit_name(name, category, ModifierSet::EMPTY);
            }
            Node::TypeSelect { qual, name, .. } | Node::TermSelect { qual, name, .. } => {
                self.emit_name(name, category, ModifierSet::EMPTY);
                self.classify_type(qual, category);
            }
            Node::TypeApply { tpe, args, .. } => {
                self.classify_type(tpe, category);
                for arg in args {
                    self.classify_type(arg, category);
                }
            }
            other => {
                trace!(
                    target: CLASSIFIER_TARGET,
                    kind = other.kind(),
                    "node is not a type reference"
                );
            }
        }
    }

    /// Consumes the classifier and returns the span stream.
    #[must_use]
    pub fn finish(self) -> Vec<SemanticToken> {
        self.collector.finish()
    }

    fn classify_all(&mut self, nodes: &[Node]) {
        for node in nodes {
            self.classify(node);
        }
    }

    fn classify_pkg(&mut self, pkg: &Pkg) {
        self.emit_keyword(pkg.pos.start, "package");
        self.classify_type(&pkg.reference, TokenCategory::Namespace);
        self.classify_all(&pkg.stats);
    }

    fn classify_import(&mut self, import: &Import) {
        self.emit_keyword(import.pos.start, "import");
        for importer in &import.importers {
            for importee in &importer.importees {
                match importee {
                    Importee::Name { name, .. } | Importee::Unimport { name, .. } => {
                        self.emit_name(name, TokenCategory::Interface, ModifierSet::EMPTY);
                    }
                    Importee::Rename { name, rename, .. } => {
                        self.emit_name(name, TokenCategory::Interface, ModifierSet::EMPTY);
                        self.emit_name(rename, TokenCategory::Interface, ModifierSet::EMPTY);
                    }
                    Importee::Wildcard { .. } | Importee::Unknown => {}
                }
            }
            self.classify_type(&importer.reference, TokenCategory::Namespace);
        }
    }

    fn classify_type_defn(&mut self, defn: &TypeDefn, category: TokenCategory) {
        self.emit_modifiers(&defn.mods);
        self.emit_name(
            &defn.name,
            category,
            ModifierSet::only(TokenModifier::Declaration),
        );
        if let Some(template) = &defn.template {
            self.classify_template(template);
        }
        if let Some(ctor) = &defn.ctor {
            for params in &ctor.param_lists {
                self.classify_all(params);
            }
        }
        if let Some(template) = &defn.template {
            self.classify_all(&template.stats);
        }
    }

    /// Visits the parents of an inheritance clause, not its body.
    fn classify_template(&mut self, template: &Template) {
        for init in &template.inits {
            self.classify_init(init);
        }
    }

    fn classify_init(&mut self, init: &Init) {
        self.classify_type(&init.tpe, TokenCategory::Interface);
        for arg in init.arg_lists.iter().flatten() {
            if let Node::LitString { pos } = arg {
                self.emit_literal(*pos, TokenCategory::String);
            }
        }
    }

    fn classify_value(&mut self, defn: &ValueDefn, keyword: &'static str) {
        self.emit_modifiers(&defn.mods);
        let start = self.keyword_start(defn.pos, &defn.mods, keyword);
        self.emit_keyword(start, keyword);
        self.classify_all(&defn.pats);
        if let Some(tpe) = &defn.decltpe {
            self.classify_type(tpe, TokenCategory::Interface);
        }
        if let Some(rhs) = &defn.rhs {
            self.classify(rhs);
        }
    }

    fn classify_def(&mut self, defn: &DefDefn) {
        self.emit_modifiers(&defn.mods);
        let start = self.keyword_start(defn.pos, &defn.mods, "def");
        self.emit_keyword(start, "def");
        self.emit_name(&defn.name, TokenCategory::Method, ModifierSet::EMPTY);
        for params in &defn.param_lists {
            self.classify_all(params);
        }
        if let Some(tpe) = &defn.decltpe {
            self.classify_type(tpe, TokenCategory::Interface);
        }
        if let Some(body) = &defn.body {
            self.classify(body);
        }
    }

    fn classify_param(&mut self, param: &Param) {
        self.emit_modifiers(&param.mods);
        self.emit_name(&param.name, TokenCategory::Parameter, ModifierSet::EMPTY);
        if let Some(tpe) = &param.decltpe {
            self.classify_type(tpe, TokenCategory::Interface);
        }
        if let Some(default) = &param.default {
            self.classify(default);
        }
    }

    /// Emits one keyword per modifier.
    ///
    /// A clause modifier such as `implicit` is repeated on every parameter
    /// of its list with the same position; it is emitted once.
    fn emit_modifiers(&mut self, mods: &[Modifier]) {
        for (keyword, pos) in mods.iter().filter_map(Modifier::keyword) {
            if self.modifier_starts.insert(pos.start) {
                self.emit_keyword(pos.start, keyword);
            } else {
                trace!(
                    target: CLASSIFIER_TARGET,
                    keyword,
                    start = pos.start,
                    "modifier already emitted"
                );
            }
        }
    }

    /// Finds where a definition keyword starts.
    ///
    /// Without modifiers the keyword opens the definition. Otherwise the
    /// source is scanned for the first whole-word occurrence after the last
    /// positioned modifier (or from the definition start when none has a
    /// position), falling back to the definition start.
    fn keyword_start(&self, defn: Pos, mods: &[Modifier], keyword: &str) -> u32 {
        if mods.is_empty() {
            return defn.start;
        }
        let after = mods
            .iter()
            .filter_map(Modifier::pos)
            .map(|pos| pos.end)
            .max()
            .unwrap_or(defn.start);
        usize::try_from(after)
            .ok()
            .and_then(|from| Some((from, self.text.get(from..)?)))
            .and_then(|(from, rest)| {
                find_word(rest, keyword).map(|index| clamp_u32(from.saturating_add(index)))
            })
            .unwrap_or(defn.start)
    }

    fn emit_literal(&mut self, pos: Pos, category: TokenCategory) {
        self.emit(pos.start, pos.len(), category, ModifierSet::EMPTY);
    }

    fn emit_keyword(&mut self, start: u32, keyword: &str) {
        self.emit(
            start,
            clamp_u32(keyword.len()),
            TokenCategory::Keyword,
            ModifierSet::EMPTY,
        );
    }

    fn emit_name(&mut self, name: &Name, category: TokenCategory, modifiers: ModifierSet) {
        self.emit(
            name.pos.start,
            clamp_u32(name.value.len()),
            category,
            modifiers,
        );
    }

    fn emit(&mut self, start: u32, length: u32, category: TokenCategory, modifiers: ModifierSet) {
        if length == 0 {
            return;
        }
        let position = self.lines.locate(start);
        self.collector
            .push(SemanticToken::new(position, length, category, modifiers));
    }
}

/// Returns the byte index of the first whole-word occurrence of `word`.
fn find_word(haystack: &str, word: &str) -> Option<usize> {
    let is_ident = |c: char| c.is_alphanumeric() || c == '_' || c == '$';
    haystack
        .match_indices(word)
        .map(|(index, _)| index)
        .find(|index| {
            let before = haystack.get(..*index).and_then(|s| s.chars().next_back());
            let after = haystack
                .get(index.saturating_add(word.len())..)
                .and_then(|s| s.chars().next());
            !before.is_some_and(is_ident) && !after.is_some_and(is_ident)
        })
}

/// Classifies every top-level statement of `root` against `text`.
///
/// # Example
///
/// ```
/// use tinct_core::{Name, Node, TokenCategory, classify_tree};
///
/// let root = Node::TermName(Name::new(0, "answer"));
/// let tokens = classify_tree("answer", &root);
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].category, TokenCategory::Variable);
/// ```
#[must_use]
pub fn classify_tree(text: &str, root: &Node) -> Vec<SemanticToken> {
    let lines = LineTable::build(text);
    let mut classifier = Classifier::new(text, &lines);
    for stat in root.top_level() {
        classifier.classify(stat);
    }
    classifier.finish()
}
