//! Shared test support utilities.
//!
//! Builds element models and resolved trees against a source string: every
//! token is located by searching the text, so offsets in the trees always
//! match the source shown in the test.

#![allow(dead_code)]

use std::sync::Once;

use relindex::nodes::{
    ArgumentList, ConstructorName, Expression, InstanceCreationExpression, SimpleIdentifier,
    Token, TypeName,
};
use relindex::{ElementId, IndexOptions, PackageAssembler, PackageIndex};
use relindex::{CompilationUnit, ElementModel};

static TRACING: Once = Once::new();

/// Install a test subscriber honouring `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Source
// ============================================================================

/// Source text that nodes are positioned against.
pub struct Source {
    text: &'static str,
}

impl Source {
    pub fn new(text: &'static str) -> Self {
        Source { text }
    }

    pub fn text(&self) -> &str {
        self.text
    }

    /// Offset of the `nth` occurrence of `needle` as a whole word.
    ///
    /// Punctuation needles match anywhere.
    pub fn at(&self, needle: &str, nth: usize) -> u32 {
        let is_word = needle.chars().all(|c| c.is_alphanumeric() || c == '_');
        let bytes = self.text.as_bytes();
        let boundary = |index: usize| {
            bytes
                .get(index)
                .is_none_or(|&b| !(b.is_ascii_alphanumeric() || b == b'_'))
        };
        self.text
            .match_indices(needle)
            .filter(|&(offset, _)| {
                !is_word
                    || ((offset == 0 || boundary(offset - 1)) && boundary(offset + needle.len()))
            })
            .nth(nth)
            .map(|(offset, _)| offset as u32)
            .unwrap_or_else(|| panic!("'{needle}' #{nth} not found in {:?}", self.text))
    }

    pub fn token(&self, lexeme: &str, nth: usize) -> Token {
        Token::new(lexeme, self.at(lexeme, nth))
    }

    pub fn ident(&self, name: &str, nth: usize, element: Option<ElementId>) -> SimpleIdentifier {
        SimpleIdentifier::new(name, self.at(name, nth), element)
    }

    pub fn type_name(&self, name: &str, nth: usize, element: Option<ElementId>) -> TypeName {
        TypeName::simple(name, self.at(name, nth), element)
    }

    /// Argument list with no arguments whose `(` is the `nth` in the source.
    pub fn empty_args(&self, nth: usize) -> ArgumentList {
        ArgumentList::new(self.at("(", nth), Vec::new(), self.at(")", nth))
    }

    /// `new Type()` calling the unnamed constructor.
    pub fn new_unnamed(
        &self,
        type_name: TypeName,
        new_nth: usize,
        paren_nth: usize,
        constructor: Option<ElementId>,
    ) -> Expression {
        Expression::InstanceCreation(Box::new(InstanceCreationExpression {
            keyword: Some(self.token("new", new_nth)),
            constructor_name: ConstructorName::unnamed(type_name, constructor),
            arguments: self.empty_args(paren_nth),
        }))
    }
}

// ============================================================================
// Indexing
// ============================================================================

/// Index `units` with a fresh assembler.
pub fn index(
    model: &ElementModel,
    units: &[&CompilationUnit],
    options: IndexOptions,
) -> PackageIndex {
    init_tracing();
    let mut assembler = PackageAssembler::with_options(model, options);
    for unit in units {
        assembler.index_unit(unit).expect("unit indexes");
    }
    assembler.assemble().expect("package assembles")
}

/// Every relation of the package as `(unit, element id, kind, offset, length)`.
pub fn flatten(index: &PackageIndex) -> Vec<(usize, u32, relindex::RelationKind, u32, u32)> {
    index
        .units
        .iter()
        .enumerate()
        .flat_map(|(position, unit)| {
            unit.relations()
                .map(move |r| (position, r.element, r.kind, r.offset, r.length))
        })
        .collect()
}
