// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Resolved syntax tree nodes.
//!
//! Nodes keep the tokens the indexer needs for source locations. Identifiers
//! and operator-bearing expressions carry the element resolution assigned to
//! them (`static_element`), or `None` when resolution found nothing.
//!
//! The tree is organized the way the grammar is:
//!
//! - [`CompilationUnit`]: directives followed by declarations
//! - [`declaration`]: classes, functions, variables, class members, parameters
//! - [`statement`]: function bodies and statements
//! - [`expression`]: expressions, identifiers, type names

pub mod declaration;
pub mod expression;
pub mod statement;

pub use declaration::*;
pub use expression::*;
pub use statement::*;

use serde::{Deserialize, Serialize};

use crate::element::ElementId;

// ============================================================================
// Tokens
// ============================================================================

/// A source token with its byte offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Token text as it appears in source.
    pub lexeme: String,
    /// Byte offset of the first character.
    pub offset: u32,
}

impl Token {
    /// Create a new token.
    pub fn new(lexeme: impl Into<String>, offset: u32) -> Self {
        Token {
            lexeme: lexeme.into(),
            offset,
        }
    }

    /// Length of the token in bytes.
    pub fn length(&self) -> u32 {
        self.lexeme.len() as u32
    }

    /// Byte offset one past the last character.
    pub fn end(&self) -> u32 {
        self.offset + self.length()
    }
}

// ============================================================================
// Compilation Unit
// ============================================================================

/// Root of a resolved syntax tree for one source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilationUnit {
    /// The compilation-unit element this tree was resolved into.
    pub element: ElementId,
    #[serde(default)]
    pub directives: Vec<Directive>,
    #[serde(default)]
    pub declarations: Vec<CompilationUnitMember>,
}

impl CompilationUnit {
    /// Create an empty unit for `element`.
    pub fn new(element: ElementId) -> Self {
        CompilationUnit {
            element,
            directives: Vec::new(),
            declarations: Vec::new(),
        }
    }

    /// Append a directive.
    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    /// Append a top-level declaration.
    pub fn with_declaration(mut self, declaration: CompilationUnitMember) -> Self {
        self.declarations.push(declaration);
        self
    }
}

// ============================================================================
// Directives
// ============================================================================

/// A directive at the top of a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Directive {
    Library(LibraryDirective),
    Import(ImportDirective),
    Export(ExportDirective),
    Part(PartDirective),
    PartOf(PartOfDirective),
}

/// Dotted library name (`a.b.c`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryIdentifier {
    pub components: Vec<SimpleIdentifier>,
}

/// `library a.b;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryDirective {
    pub keyword: Token,
    pub name: LibraryIdentifier,
    pub semicolon: Token,
    pub element: Option<ElementId>,
}

/// `show a, b` or `hide a, b`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combinator {
    pub keyword: Token,
    pub names: Vec<SimpleIdentifier>,
}

/// `import 'uri' as p show a;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportDirective {
    pub keyword: Token,
    pub uri: StringLiteral,
    /// Compilation unit the URI resolves to.
    pub uri_element: Option<ElementId>,
    /// The import element; its `library` is the imported library.
    pub element: Option<ElementId>,
    pub prefix: Option<SimpleIdentifier>,
    #[serde(default)]
    pub combinators: Vec<Combinator>,
    pub semicolon: Token,
}

/// `export 'uri' hide a;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDirective {
    pub keyword: Token,
    pub uri: StringLiteral,
    /// Compilation unit the URI resolves to.
    pub uri_element: Option<ElementId>,
    /// The export element; its `library` is the exported library.
    pub element: Option<ElementId>,
    #[serde(default)]
    pub combinators: Vec<Combinator>,
    pub semicolon: Token,
}

/// `part 'uri';`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartDirective {
    pub keyword: Token,
    pub uri: StringLiteral,
    pub semicolon: Token,
    /// The part's compilation unit.
    pub element: Option<ElementId>,
}

/// `part of a.b;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartOfDirective {
    pub keyword: Token,
    pub of_keyword: Token,
    pub library_name: LibraryIdentifier,
    pub semicolon: Token,
    /// The owning library.
    pub element: Option<ElementId>,
}

macro_rules! directive_span {
    ($($node:ty),* $(,)?) => {
        $(
            impl $node {
                /// Byte offset of the directive keyword.
                pub fn offset(&self) -> u32 {
                    self.keyword.offset
                }

                /// Length from the keyword through the semicolon.
                pub fn length(&self) -> u32 {
                    self.semicolon.end().saturating_sub(self.keyword.offset)
                }
            }
        )*
    };
}

directive_span!(
    LibraryDirective,
    ImportDirective,
    ExportDirective,
    PartDirective,
    PartOfDirective,
);
