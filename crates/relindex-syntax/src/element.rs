// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Semantic element model.
//!
//! Elements are the program entities produced by name resolution: libraries,
//! compilation units, classes, constructors, methods, fields, parameters, and
//! so on. Every resolved identifier in the syntax tree points at an element by
//! [`ElementId`].
//!
//! The [`ElementModel`] is an append-only arena shared by every unit of one
//! analysis session, so the same `ElementId` denotes the same element no
//! matter which unit references it.
//!
//! # Enclosing Chain
//!
//! Each element except a library records its enclosing element:
//!
//! | Element | Enclosing |
//! |---------|-----------|
//! | compilation unit | library |
//! | class, function, top-level variable | compilation unit |
//! | method, constructor, field | class |
//! | parameter, local variable, local function | executable |
//! | import, export | library |

use serde::{Deserialize, Serialize};

// ============================================================================
// Element Identity
// ============================================================================

/// Identity of an element inside an [`ElementModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct ElementId(pub u32);

impl ElementId {
    /// Create a new element ID.
    pub fn new(id: u32) -> Self {
        ElementId(id)
    }

    /// Position of the element in its model.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "elem_{}", self.0)
    }
}

// ============================================================================
// Kinds
// ============================================================================

/// How a parameter is passed at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum ParameterKind {
    /// `f(a)`
    #[default]
    Required,
    /// `f([a])`
    Positional,
    /// `f({a})`
    Named,
}

/// Kind of semantic element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Library,
    CompilationUnit,
    /// Class, class alias, or mixin application.
    Class,
    Enum,
    FunctionTypeAlias,
    Constructor,
    Method,
    Getter,
    Setter,
    Field,
    TopLevelVariable,
    Function,
    TypeParameter,
    Parameter(ParameterKind),
    LocalVariable,
    Label,
    /// Import prefix (`import 'a.dart' as p;`).
    Prefix,
    Import,
    Export,
}

impl ElementKind {
    /// Constructors, methods, accessors, and functions.
    pub fn is_executable(self) -> bool {
        matches!(
            self,
            ElementKind::Constructor
                | ElementKind::Method
                | ElementKind::Getter
                | ElementKind::Setter
                | ElementKind::Function
        )
    }

    /// Class-like elements that can appear in a supertype clause.
    pub fn is_class_like(self) -> bool {
        matches!(self, ElementKind::Class | ElementKind::Enum)
    }

    /// Fields, top-level variables, getters, and setters.
    pub fn is_property(self) -> bool {
        matches!(
            self,
            ElementKind::Field
                | ElementKind::TopLevelVariable
                | ElementKind::Getter
                | ElementKind::Setter
        )
    }

    /// Returns the string representation used in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Library => "library",
            ElementKind::CompilationUnit => "compilation_unit",
            ElementKind::Class => "class",
            ElementKind::Enum => "enum",
            ElementKind::FunctionTypeAlias => "function_type_alias",
            ElementKind::Constructor => "constructor",
            ElementKind::Method => "method",
            ElementKind::Getter => "getter",
            ElementKind::Setter => "setter",
            ElementKind::Field => "field",
            ElementKind::TopLevelVariable => "top_level_variable",
            ElementKind::Function => "function",
            ElementKind::TypeParameter => "type_parameter",
            ElementKind::Parameter(_) => "parameter",
            ElementKind::LocalVariable => "local_variable",
            ElementKind::Label => "label",
            ElementKind::Prefix => "prefix",
            ElementKind::Import => "import",
            ElementKind::Export => "export",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Element
// ============================================================================

/// A resolved semantic element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Kind of element.
    pub kind: ElementKind,
    /// Declared name (empty for unnamed constructors and units).
    pub name: String,
    /// Byte offset of the name at the declaration site.
    pub name_offset: u32,
    /// Enclosing element, `None` for libraries and detached elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enclosing: Option<ElementId>,
    /// Source URI of a library or compilation unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_uri: Option<String>,
    /// Defining compilation unit of a library.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defining_unit: Option<ElementId>,
    /// Explicit or implicit supertype of a class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supertype: Option<ElementId>,
    /// Compiler-generated element with no source declaration.
    #[serde(default)]
    pub is_synthetic: bool,
    /// Target of a redirecting constructor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirected_constructor: Option<ElementId>,
    /// Field initialized by a field-formal parameter (`this.x`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<ElementId>,
    /// Library imported or exported by an import/export element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<ElementId>,
}

impl Element {
    /// Create a new element with no links.
    pub fn new(kind: ElementKind, name: impl Into<String>, name_offset: u32) -> Self {
        Element {
            kind,
            name: name.into(),
            name_offset,
            enclosing: None,
            source_uri: None,
            defining_unit: None,
            supertype: None,
            is_synthetic: false,
            redirected_constructor: None,
            field: None,
            library: None,
        }
    }

    /// Set the enclosing element.
    pub fn with_enclosing(mut self, enclosing: ElementId) -> Self {
        self.enclosing = Some(enclosing);
        self
    }

    /// Set the source URI (libraries and units).
    pub fn with_source_uri(mut self, uri: impl Into<String>) -> Self {
        self.source_uri = Some(uri.into());
        self
    }

    /// Set the supertype (classes).
    pub fn with_supertype(mut self, supertype: ElementId) -> Self {
        self.supertype = Some(supertype);
        self
    }

    /// Mark the element as compiler-generated.
    pub fn synthetic(mut self) -> Self {
        self.is_synthetic = true;
        self
    }

    /// Set the redirection target (constructors).
    pub fn with_redirected_constructor(mut self, target: ElementId) -> Self {
        self.redirected_constructor = Some(target);
        self
    }

    /// Set the backing field (field-formal parameters).
    pub fn with_field(mut self, field: ElementId) -> Self {
        self.field = Some(field);
        self
    }

    /// Set the imported or exported library (import/export elements).
    pub fn with_library(mut self, library: ElementId) -> Self {
        self.library = Some(library);
        self
    }

    /// True for parameters that are not passed by name.
    pub fn is_positional_parameter(&self) -> bool {
        matches!(
            self.kind,
            ElementKind::Parameter(ParameterKind::Required)
                | ElementKind::Parameter(ParameterKind::Positional)
        )
    }
}

// ============================================================================
// Element Model
// ============================================================================

/// Append-only arena of resolved elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementModel {
    elements: Vec<Element>,
}

impl ElementModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element and return its identity.
    pub fn add(&mut self, element: Element) -> ElementId {
        let id = ElementId(self.elements.len() as u32);
        self.elements.push(element);
        id
    }

    /// Look up an element.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.index())
    }

    /// Mutable access for linking elements after creation.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.index())
    }

    /// Number of elements in the model.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the model has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate the element and its enclosing elements, innermost first.
    ///
    /// Stops at the first missing link. A cycle in the enclosing links is cut
    /// off after visiting every element once.
    pub fn enclosing_chain(&self, id: ElementId) -> impl Iterator<Item = (ElementId, &Element)> {
        let limit = self.elements.len();
        let mut next = Some(id);
        std::iter::from_fn(move || {
            let current = next?;
            let element = self.get(current)?;
            next = element.enclosing;
            Some((current, element))
        })
        .take(limit)
    }

    /// True for a function declared inside another executable.
    pub fn is_local_function(&self, id: ElementId) -> bool {
        let Some(element) = self.get(id) else {
            return false;
        };
        if element.kind != ElementKind::Function {
            return false;
        }
        element
            .enclosing
            .and_then(|enclosing| self.get(enclosing))
            .is_some_and(|enclosing| enclosing.kind.is_executable())
    }

    // ------------------------------------------------------------------------
    // Builders
    // ------------------------------------------------------------------------

    /// Add a library with its defining unit and return `(library, unit)`.
    pub fn add_library(&mut self, uri: &str) -> (ElementId, ElementId) {
        let library = self.add(Element::new(ElementKind::Library, "", 0).with_source_uri(uri));
        let unit = self.add(
            Element::new(ElementKind::CompilationUnit, "", 0)
                .with_enclosing(library)
                .with_source_uri(uri),
        );
        if let Some(element) = self.get_mut(library) {
            element.defining_unit = Some(unit);
        }
        (library, unit)
    }

    /// Add a part unit to an existing library.
    pub fn add_part(&mut self, library: ElementId, uri: &str) -> ElementId {
        self.add(
            Element::new(ElementKind::CompilationUnit, "", 0)
                .with_enclosing(library)
                .with_source_uri(uri),
        )
    }

    /// Add an element of `kind` enclosed by `enclosing`.
    pub fn add_child(
        &mut self,
        enclosing: ElementId,
        kind: ElementKind,
        name: &str,
        name_offset: u32,
    ) -> ElementId {
        self.add(Element::new(kind, name, name_offset).with_enclosing(enclosing))
    }
}
