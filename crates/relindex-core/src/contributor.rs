//! Relation extraction from a resolved syntax tree.
//!
//! The [`RelationContributor`] is a [`Visitor`] that classifies every
//! reference-bearing construct of a unit and records it on the unit's
//! [`UnitAssembler`].
//!
//! # Classification
//!
//! | Construct | Kind | Location |
//! |-----------|------|----------|
//! | extends clause, or implicit supertype | `IsExtendedBy` | type name, or class name |
//! | with clause | `IsMixedInBy` | each mixin type name |
//! | implements clause | `IsImplementedBy` | each interface type name |
//! | binary, assignment, prefix, postfix operator | `IsInvokedBy` | operator token |
//! | index operator | `IsInvokedBy` | left bracket |
//! | invocation by name | `IsInvokedBy` | invoked name |
//! | identifier | `IsReferencedBy` | identifier |
//! | field-formal parameter | `IsReferencedBy` (field) | parameter |
//! | import, export | `IsReferencedBy` (unit and library) | URI literal |
//! | part, part of | `IsReferencedBy` | directive |
//! | constructor invocation or redirection | `IsReferencedBy` | `.name`, or empty after the type |
//! | field initializer | `IsReferencedBy` | field name |
//!
//! # Filtering
//!
//! References to local variables, positional parameters, and functions
//! declared inside another executable are never recorded. Identifiers already
//! consumed by one of the construct rules above are claimed so the generic
//! identifier rule does not record them a second time.

use std::collections::HashSet;

use relindex_syntax::nodes::{
    AssignmentExpression, BinaryExpression, ClassDeclaration, ClassTypeAlias, CompilationUnit,
    CompilationUnitMember, ConstructorFieldInitializer, ConstructorName, ExportDirective,
    FieldFormalParameter, ImplementsClause, ImportDirective, IndexExpression, MethodInvocation,
    PartDirective, PartOfDirective, PostfixExpression, PrefixExpression,
    RedirectingConstructorInvocation, SimpleIdentifier, SuperConstructorInvocation, Token,
    TypeName, WithClause,
};
use relindex_syntax::visitor::{walk_compilation_unit, VisitResult, Visitor};
use relindex_syntax::{ElementId, ElementKind, ElementModel, ParameterKind};

use crate::element_table::ElementInterner;
use crate::options::IndexOptions;
use crate::relation::RelationKind;
use crate::unit::UnitAssembler;

/// Walk `unit` and record its relations on `assembler`.
pub fn contribute(
    unit: &CompilationUnit,
    assembler: &mut UnitAssembler,
    interner: &mut ElementInterner<'_>,
    options: IndexOptions,
) {
    let mut contributor = RelationContributor::new(assembler, interner, options);
    walk_compilation_unit(&mut contributor, unit);
}

/// Resolve a synthetic redirecting constructor to its target.
///
/// Only one level of redirection is followed.
pub fn redirect_target(model: &ElementModel, constructor: ElementId) -> ElementId {
    match model.get(constructor) {
        Some(element) if element.kind == ElementKind::Constructor && element.is_synthetic => {
            element.redirected_constructor.unwrap_or(constructor)
        }
        _ => constructor,
    }
}

/// Visitor that turns resolved constructs into relations.
pub struct RelationContributor<'c, 'm> {
    unit: &'c mut UnitAssembler,
    interner: &'c mut ElementInterner<'m>,
    options: IndexOptions,
    /// Offsets of identifiers handled by a construct rule.
    claimed: HashSet<u32>,
}

impl<'c, 'm> RelationContributor<'c, 'm> {
    pub fn new(
        unit: &'c mut UnitAssembler,
        interner: &'c mut ElementInterner<'m>,
        options: IndexOptions,
    ) -> Self {
        RelationContributor {
            unit,
            interner,
            options,
            claimed: HashSet::new(),
        }
    }

    fn model(&self) -> &'m ElementModel {
        self.interner.model()
    }

    /// Elements that are never indexed.
    fn is_filtered(&self, element: ElementId) -> bool {
        let model = self.model();
        let Some(target) = model.get(element) else {
            return false;
        };
        match target.kind {
            ElementKind::LocalVariable => true,
            ElementKind::Parameter(_) => target.is_positional_parameter(),
            ElementKind::Function => model.is_local_function(element),
            _ => false,
        }
    }

    fn record(&mut self, element: Option<ElementId>, kind: RelationKind, offset: u32, length: u32) {
        let Some(element) = element else {
            return;
        };
        if self.is_filtered(element) {
            return;
        }
        self.unit.add_relation(self.interner, element, kind, offset, length);
    }

    fn record_token(&mut self, element: Option<ElementId>, kind: RelationKind, token: &Token) {
        self.record(element, kind, token.offset, token.length());
    }

    fn record_identifier(&mut self, identifier: &SimpleIdentifier, kind: RelationKind) {
        self.record(
            identifier.static_element,
            kind,
            identifier.offset(),
            identifier.length(),
        );
    }

    fn claim(&mut self, identifier: &SimpleIdentifier) {
        self.claimed.insert(identifier.offset());
    }

    /// Record a supertype clause entry and claim its name.
    fn record_supertype(&mut self, type_name: &TypeName, kind: RelationKind) {
        self.claim(type_name.name.name_identifier());
        self.record(
            type_name.element(),
            kind,
            type_name.offset(),
            type_name.name_length(),
        );
    }

    fn record_with_clause(&mut self, clause: &WithClause) {
        for mixin in &clause.mixins {
            self.record_supertype(mixin, RelationKind::IsMixedInBy);
        }
    }

    fn record_implements_clause(&mut self, clause: &ImplementsClause) {
        for interface in &clause.interfaces {
            self.record_supertype(interface, RelationKind::IsImplementedBy);
        }
    }

    fn record_definition(&mut self, name: &SimpleIdentifier) {
        if self.options.record_definitions {
            self.record_identifier(name, RelationKind::IsDefinedBy);
        }
    }

    /// Record a constructor reference, following one synthetic redirection.
    fn record_constructor(&mut self, constructor: Option<ElementId>, offset: u32, length: u32) {
        let target = constructor.map(|constructor| redirect_target(self.model(), constructor));
        self.record(target, RelationKind::IsReferencedBy, offset, length);
    }

    /// Record `this.name(...)`/`super.name(...)`, or the empty location after
    /// the keyword for the unnamed constructor.
    fn record_constructor_invocation(
        &mut self,
        keyword: &Token,
        period: Option<&Token>,
        name: Option<&SimpleIdentifier>,
        constructor: Option<ElementId>,
    ) {
        match (period, name) {
            (Some(period), Some(name)) => {
                self.claim(name);
                let length = name.end().saturating_sub(period.offset);
                self.record_constructor(constructor, period.offset, length);
            }
            _ => self.record_constructor(constructor, keyword.end(), 0),
        }
    }

    /// Kinds recorded by the generic identifier rule.
    fn is_referenceable(kind: ElementKind) -> bool {
        matches!(
            kind,
            ElementKind::Class
                | ElementKind::Enum
                | ElementKind::Function
                | ElementKind::FunctionTypeAlias
                | ElementKind::Label
                | ElementKind::Method
                | ElementKind::Getter
                | ElementKind::Setter
                | ElementKind::Field
                | ElementKind::TopLevelVariable
                | ElementKind::TypeParameter
                | ElementKind::Parameter(ParameterKind::Named)
        )
    }
}

impl Visitor for RelationContributor<'_, '_> {
    // ------------------------------------------------------------------------
    // Declarations
    // ------------------------------------------------------------------------

    fn visit_compilation_unit_member(&mut self, node: &CompilationUnitMember) -> VisitResult {
        match node {
            CompilationUnitMember::Class(d) => self.record_definition(&d.name),
            CompilationUnitMember::ClassAlias(d) => self.record_definition(&d.name),
            CompilationUnitMember::Enum(d) => self.record_definition(&d.name),
            CompilationUnitMember::Function(d) => self.record_definition(&d.name),
            CompilationUnitMember::FunctionTypeAlias(d) => self.record_definition(&d.name),
            CompilationUnitMember::TopLevelVariable(list) => {
                for variable in &list.variables {
                    self.record_definition(&variable.name);
                }
            }
        }
        VisitResult::Continue
    }

    fn visit_class_declaration(&mut self, node: &ClassDeclaration) -> VisitResult {
        match &node.extends_clause {
            Some(clause) => self.record_supertype(&clause.superclass, RelationKind::IsExtendedBy),
            None if self.options.index_implicit_supertypes => {
                let supertype = node
                    .element()
                    .and_then(|class| self.model().get(class))
                    .and_then(|class| class.supertype);
                self.record_implicit_supertype(supertype, &node.name);
            }
            None => {}
        }
        if let Some(clause) = &node.with_clause {
            self.record_with_clause(clause);
        }
        if let Some(clause) = &node.implements_clause {
            self.record_implements_clause(clause);
        }
        VisitResult::Continue
    }

    fn visit_class_type_alias(&mut self, node: &ClassTypeAlias) -> VisitResult {
        self.record_supertype(&node.superclass, RelationKind::IsExtendedBy);
        self.record_with_clause(&node.with_clause);
        if let Some(clause) = &node.implements_clause {
            self.record_implements_clause(clause);
        }
        VisitResult::Continue
    }

    fn visit_field_formal_parameter(&mut self, node: &FieldFormalParameter) -> VisitResult {
        let field = node
            .identifier
            .static_element
            .and_then(|parameter| self.model().get(parameter))
            .and_then(|parameter| parameter.field);
        self.record(
            field,
            RelationKind::IsReferencedBy,
            node.offset(),
            node.length(),
        );
        VisitResult::Continue
    }

    fn visit_constructor_field_initializer(
        &mut self,
        node: &ConstructorFieldInitializer,
    ) -> VisitResult {
        self.claim(&node.field_name);
        self.record_identifier(&node.field_name, RelationKind::IsReferencedBy);
        VisitResult::Continue
    }

    fn visit_redirecting_constructor_invocation(
        &mut self,
        node: &RedirectingConstructorInvocation,
    ) -> VisitResult {
        self.record_constructor_invocation(
            &node.this_keyword,
            node.period.as_ref(),
            node.constructor_name.as_ref(),
            node.static_element,
        );
        VisitResult::Continue
    }

    fn visit_super_constructor_invocation(
        &mut self,
        node: &SuperConstructorInvocation,
    ) -> VisitResult {
        self.record_constructor_invocation(
            &node.super_keyword,
            node.period.as_ref(),
            node.constructor_name.as_ref(),
            node.static_element,
        );
        VisitResult::Continue
    }

    // ------------------------------------------------------------------------
    // Directives
    // ------------------------------------------------------------------------

    fn visit_import_directive(&mut self, node: &ImportDirective) -> VisitResult {
        let library = node
            .element
            .and_then(|import| self.model().get(import))
            .and_then(|import| import.library);
        self.record_uri_target(node.uri_element, library, node.uri.offset(), node.uri.length());
        VisitResult::Continue
    }

    fn visit_export_directive(&mut self, node: &ExportDirective) -> VisitResult {
        let library = node
            .element
            .and_then(|export| self.model().get(export))
            .and_then(|export| export.library);
        self.record_uri_target(node.uri_element, library, node.uri.offset(), node.uri.length());
        VisitResult::Continue
    }

    fn visit_part_directive(&mut self, node: &PartDirective) -> VisitResult {
        self.record(
            node.element,
            RelationKind::IsReferencedBy,
            node.offset(),
            node.length(),
        );
        VisitResult::Continue
    }

    fn visit_part_of_directive(&mut self, node: &PartOfDirective) -> VisitResult {
        self.record(
            node.element,
            RelationKind::IsReferencedBy,
            node.offset(),
            node.length(),
        );
        VisitResult::Continue
    }

    // ------------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------------

    fn visit_binary_expression(&mut self, node: &BinaryExpression) -> VisitResult {
        self.record_token(node.static_element, RelationKind::IsInvokedBy, &node.operator);
        VisitResult::Continue
    }

    fn visit_assignment_expression(&mut self, node: &AssignmentExpression) -> VisitResult {
        self.record_token(node.static_element, RelationKind::IsInvokedBy, &node.operator);
        VisitResult::Continue
    }

    fn visit_prefix_expression(&mut self, node: &PrefixExpression) -> VisitResult {
        self.record_token(node.static_element, RelationKind::IsInvokedBy, &node.operator);
        VisitResult::Continue
    }

    fn visit_postfix_expression(&mut self, node: &PostfixExpression) -> VisitResult {
        self.record_token(node.static_element, RelationKind::IsInvokedBy, &node.operator);
        VisitResult::Continue
    }

    fn visit_index_expression(&mut self, node: &IndexExpression) -> VisitResult {
        self.record_token(
            node.static_element,
            RelationKind::IsInvokedBy,
            &node.left_bracket,
        );
        VisitResult::Continue
    }

    fn visit_method_invocation(&mut self, node: &MethodInvocation) -> VisitResult {
        self.claim(&node.method_name);
        self.record_identifier(&node.method_name, RelationKind::IsInvokedBy);
        VisitResult::Continue
    }

    fn visit_constructor_name(&mut self, node: &ConstructorName) -> VisitResult {
        self.claim(node.type_name.name.name_identifier());
        match (&node.period, &node.name) {
            (Some(period), Some(name)) => {
                self.claim(name);
                self.record_constructor(
                    node.static_element,
                    period.offset,
                    name.end().saturating_sub(period.offset),
                );
            }
            _ => self.record_constructor(node.static_element, node.type_name.end(), 0),
        }
        VisitResult::Continue
    }

    fn visit_simple_identifier(&mut self, node: &SimpleIdentifier) -> VisitResult {
        if self.claimed.remove(&node.offset()) {
            return VisitResult::Continue;
        }
        let referenceable = node
            .static_element
            .and_then(|element| self.model().get(element))
            .is_some_and(|element| Self::is_referenceable(element.kind));
        if referenceable {
            self.record_identifier(node, RelationKind::IsReferencedBy);
        }
        VisitResult::Continue
    }
}

impl RelationContributor<'_, '_> {
    /// Implicit supertype relation, located at the class name.
    fn record_implicit_supertype(&mut self, supertype: Option<ElementId>, name: &SimpleIdentifier) {
        self.record(
            supertype,
            RelationKind::IsExtendedBy,
            name.offset(),
            name.length(),
        );
    }

    /// Import/export: the unit the URI resolves to, then the library.
    fn record_uri_target(
        &mut self,
        unit: Option<ElementId>,
        library: Option<ElementId>,
        offset: u32,
        length: u32,
    ) {
        self.record(unit, RelationKind::IsReferencedBy, offset, length);
        self.record(library, RelationKind::IsReferencedBy, offset, length);
    }
}
