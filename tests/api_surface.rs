//! Compile-only test to verify public API surface.
//!
//! This file serves as a compile-time contract for the public API.
//! If this file fails to compile, the public API has regressed.
//!
//! Run with: cargo test -- api_surface

// Allow unused imports - this test is about compile-time verification, not runtime usage
#![allow(unused_imports)]

// ============================================================================
// Input Side
// ============================================================================

// element module - semantic elements and the model arena
use relindex::element::{Element, ElementId, ElementKind, ElementModel, ParameterKind};

// nodes module - resolved syntax tree
use relindex::nodes::{
    ArgumentList, AssignmentExpression, BinaryExpression, Block, ClassDeclaration, ClassMember,
    ClassTypeAlias, Combinator, CompilationUnit, CompilationUnitMember, ConstructorDeclaration,
    ConstructorFieldInitializer, ConstructorInitializer, ConstructorName, DefaultFormalParameter,
    Directive, EnumDeclaration, ExportDirective, Expression, ExtendsClause, FieldDeclaration,
    FieldFormalParameter, FormalParameter, FormalParameterList, FunctionBody, FunctionDeclaration,
    FunctionTypeAlias, Identifier, ImplementsClause, ImportDirective, IndexExpression,
    InstanceCreationExpression, Label, LibraryDirective, LibraryIdentifier, Literal,
    MethodDeclaration, MethodInvocation, NamedExpression, PartDirective, PartOfDirective,
    PostfixExpression, PrefixExpression, PrefixedIdentifier, PropertyAccess,
    RedirectingConstructorInvocation, SimpleFormalParameter, SimpleIdentifier, Statement,
    StringLiteral, SuperConstructorInvocation, Token, TypeName, TypeParameter,
    VariableDeclaration, VariableDeclarationList, WithClause,
};

// visitor module - traversal
use relindex::visitor::{walk_compilation_unit, walk_expression, VisitResult, Visitor};

// ============================================================================
// Indexing Core
// ============================================================================

use relindex::contributor::{contribute, redirect_target, RelationContributor};
use relindex::element_table::{
    enclosing_unit, unit_uris, ElementInfo, ElementInfoId, ElementInterner, ElementTable,
    UnitUris,
};
use relindex::error::{IndexError, IndexResult};
use relindex::options::IndexOptions;
use relindex::package::{PackageAssembler, PackageIndex, PackageRelation, INDEX_SCHEMA_VERSION};
use relindex::relation::{RelationInfo, RelationKind};
use relindex::unit::{UnitAssembler, UnitIndex, UnitRelation};
use relindex::uri::{UriId, UriTable};

// Facade
use relindex::{index_units, units_from_json};

#[test]
fn api_surface_compiles() {
    // This test exists to ensure the imports above compile.
    // If we get here, the API surface is intact.
    assert_eq!(INDEX_SCHEMA_VERSION, 1);
}

#[test]
fn facade_indexes_nothing() {
    let model = ElementModel::new();
    let index = index_units(&model, &[], IndexOptions::default()).unwrap();
    assert_eq!(index, PackageIndex::default());
    assert_eq!(index.schema_version, INDEX_SCHEMA_VERSION);
    assert!(index.to_json().unwrap().contains("\"schemaVersion\":1"));
    assert!(units_from_json("[]").unwrap().is_empty());
    assert!(matches!(
        units_from_json("not json"),
        Err(IndexError::Serialization(_))
    ));
}
