// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Walk functions for resolved tree traversal.
//!
//! This module contains walk functions that traverse nodes and call visitor methods:
//!
//! - **Pre-order**: `visit_*` is called before descending into children
//! - **Post-order**: `leave_*` is called after all children have been visited
//! - **Source order**: Children are visited left-to-right, top-to-bottom
//!
//! # Control Flow
//!
//! - `VisitResult::Continue` - traverse into children
//! - `VisitResult::SkipChildren` - skip children but still call `leave_*`
//! - `VisitResult::Stop` - halt traversal immediately (no `leave_*` called)

use super::traits::{VisitResult, Visitor};
use crate::nodes::{
    ArgumentList, AssignmentExpression, BinaryExpression, Block, BreakStatement, ClassDeclaration,
    ClassMember, ClassTypeAlias, Combinator, CompilationUnit, CompilationUnitMember,
    ConditionalExpression, ConstructorDeclaration, ConstructorFieldInitializer,
    ConstructorInitializer, ConstructorName, ContinueStatement, DefaultFormalParameter, Directive,
    EnumDeclaration, ExportDirective, Expression, ExtendsClause, FieldDeclaration,
    FieldFormalParameter, FormalParameter, FormalParameterList, FunctionBody, FunctionDeclaration,
    FunctionTypeAlias, Identifier, IfStatement, ImplementsClause, ImportDirective, IndexExpression,
    InstanceCreationExpression, Label, LabeledStatement, LibraryDirective, LibraryIdentifier,
    Literal, MethodDeclaration, MethodInvocation, NamedExpression, ParenthesizedExpression,
    PartDirective, PartOfDirective, PostfixExpression, PrefixExpression, PrefixedIdentifier,
    PropertyAccess, RedirectingConstructorInvocation, ReturnStatement, SimpleFormalParameter,
    SimpleIdentifier, Statement, StringLiteral, SuperConstructorInvocation, TypeName,
    TypeParameter, VariableDeclaration, VariableDeclarationList, WhileStatement, WithClause,
};

/// Propagate `Stop` from a child walk.
macro_rules! walk {
    ($e:expr) => {
        if $e == VisitResult::Stop {
            return VisitResult::Stop;
        }
    };
}

/// Generate a walk function from its visit/leave pair and a child walk body.
///
/// The body runs only when `visit_*` returns `Continue`.
macro_rules! walk_fn {
    (
        $(#[$meta:meta])*
        $name:ident($node_type:ty) => $visit:ident, $leave:ident,
        |$visitor:ident, $node:ident| $body:block
    ) => {
        $(#[$meta])*
        pub fn $name<V: Visitor + ?Sized>($visitor: &mut V, $node: &$node_type) -> VisitResult {
            match $visitor.$visit($node) {
                VisitResult::Stop => return VisitResult::Stop,
                VisitResult::SkipChildren => {}
                VisitResult::Continue => $body,
            }
            $visitor.$leave($node);
            VisitResult::Continue
        }
    };
}

// ============================================================================
// Unit and directives
// ============================================================================

walk_fn! {
    /// Walk a [`CompilationUnit`]: directives, then declarations.
    walk_compilation_unit(CompilationUnit) => visit_compilation_unit, leave_compilation_unit,
    |visitor, node| {
        for directive in &node.directives {
            walk!(walk_directive(visitor, directive));
        }
        for declaration in &node.declarations {
            walk!(walk_compilation_unit_member(visitor, declaration));
        }
    }
}

walk_fn! {
    /// Walk a [`Directive`], dispatching to the concrete directive walk.
    walk_directive(Directive) => visit_directive, leave_directive,
    |visitor, node| {
        walk!(match node {
            Directive::Library(d) => walk_library_directive(visitor, d),
            Directive::Import(d) => walk_import_directive(visitor, d),
            Directive::Export(d) => walk_export_directive(visitor, d),
            Directive::Part(d) => walk_part_directive(visitor, d),
            Directive::PartOf(d) => walk_part_of_directive(visitor, d),
        });
    }
}

walk_fn! {
    walk_library_directive(LibraryDirective) => visit_library_directive, leave_library_directive,
    |visitor, node| {
        walk!(walk_library_identifier(visitor, &node.name));
    }
}

walk_fn! {
    /// Walk an [`ImportDirective`]: URI, prefix (declared), combinators.
    walk_import_directive(ImportDirective) => visit_import_directive, leave_import_directive,
    |visitor, node| {
        walk!(walk_string_literal(visitor, &node.uri));
        if let Some(prefix) = &node.prefix {
            walk!(walk_declared_identifier(visitor, prefix));
        }
        for combinator in &node.combinators {
            walk!(walk_combinator(visitor, combinator));
        }
    }
}

walk_fn! {
    walk_export_directive(ExportDirective) => visit_export_directive, leave_export_directive,
    |visitor, node| {
        walk!(walk_string_literal(visitor, &node.uri));
        for combinator in &node.combinators {
            walk!(walk_combinator(visitor, combinator));
        }
    }
}

walk_fn! {
    walk_part_directive(PartDirective) => visit_part_directive, leave_part_directive,
    |visitor, node| {
        walk!(walk_string_literal(visitor, &node.uri));
    }
}

walk_fn! {
    walk_part_of_directive(PartOfDirective) => visit_part_of_directive, leave_part_of_directive,
    |visitor, node| {
        walk!(walk_library_identifier(visitor, &node.library_name));
    }
}

walk_fn! {
    walk_combinator(Combinator) => visit_combinator, leave_combinator,
    |visitor, node| {
        for name in &node.names {
            walk!(walk_simple_identifier(visitor, name));
        }
    }
}

walk_fn! {
    walk_library_identifier(LibraryIdentifier) => visit_library_identifier, leave_library_identifier,
    |visitor, node| {
        for component in &node.components {
            walk!(walk_simple_identifier(visitor, component));
        }
    }
}

// ============================================================================
// Top-level declarations
// ============================================================================

walk_fn! {
    walk_compilation_unit_member(CompilationUnitMember) => visit_compilation_unit_member, leave_compilation_unit_member,
    |visitor, node| {
        walk!(match node {
            CompilationUnitMember::Class(d) => walk_class_declaration(visitor, d),
            CompilationUnitMember::ClassAlias(d) => walk_class_type_alias(visitor, d),
            CompilationUnitMember::Enum(d) => walk_enum_declaration(visitor, d),
            CompilationUnitMember::Function(d) => walk_function_declaration(visitor, d),
            CompilationUnitMember::FunctionTypeAlias(d) => walk_function_type_alias(visitor, d),
            CompilationUnitMember::TopLevelVariable(d) => walk_variable_declaration_list(visitor, d),
        });
    }
}

walk_fn! {
    /// Walk a [`ClassDeclaration`]: name, type parameters, clauses, members.
    walk_class_declaration(ClassDeclaration) => visit_class_declaration, leave_class_declaration,
    |visitor, node| {
        walk!(walk_declared_identifier(visitor, &node.name));
        for type_parameter in &node.type_parameters {
            walk!(walk_type_parameter(visitor, type_parameter));
        }
        if let Some(clause) = &node.extends_clause {
            walk!(walk_extends_clause(visitor, clause));
        }
        if let Some(clause) = &node.with_clause {
            walk!(walk_with_clause(visitor, clause));
        }
        if let Some(clause) = &node.implements_clause {
            walk!(walk_implements_clause(visitor, clause));
        }
        for member in &node.members {
            walk!(walk_class_member(visitor, member));
        }
    }
}

walk_fn! {
    walk_class_type_alias(ClassTypeAlias) => visit_class_type_alias, leave_class_type_alias,
    |visitor, node| {
        walk!(walk_declared_identifier(visitor, &node.name));
        for type_parameter in &node.type_parameters {
            walk!(walk_type_parameter(visitor, type_parameter));
        }
        walk!(walk_type_name(visitor, &node.superclass));
        walk!(walk_with_clause(visitor, &node.with_clause));
        if let Some(clause) = &node.implements_clause {
            walk!(walk_implements_clause(visitor, clause));
        }
    }
}

walk_fn! {
    walk_enum_declaration(EnumDeclaration) => visit_enum_declaration, leave_enum_declaration,
    |visitor, node| {
        walk!(walk_declared_identifier(visitor, &node.name));
        for constant in &node.constants {
            walk!(walk_declared_identifier(visitor, constant));
        }
    }
}

walk_fn! {
    walk_function_declaration(FunctionDeclaration) => visit_function_declaration, leave_function_declaration,
    |visitor, node| {
        if let Some(return_type) = &node.return_type {
            walk!(walk_type_name(visitor, return_type));
        }
        walk!(walk_declared_identifier(visitor, &node.name));
        for type_parameter in &node.type_parameters {
            walk!(walk_type_parameter(visitor, type_parameter));
        }
        walk!(walk_formal_parameter_list(visitor, &node.parameters));
        walk!(walk_function_body(visitor, &node.body));
    }
}

walk_fn! {
    walk_function_type_alias(FunctionTypeAlias) => visit_function_type_alias, leave_function_type_alias,
    |visitor, node| {
        if let Some(return_type) = &node.return_type {
            walk!(walk_type_name(visitor, return_type));
        }
        walk!(walk_declared_identifier(visitor, &node.name));
        for type_parameter in &node.type_parameters {
            walk!(walk_type_parameter(visitor, type_parameter));
        }
        walk!(walk_formal_parameter_list(visitor, &node.parameters));
    }
}

walk_fn! {
    walk_variable_declaration_list(VariableDeclarationList) => visit_variable_declaration_list, leave_variable_declaration_list,
    |visitor, node| {
        if let Some(type_name) = &node.type_name {
            walk!(walk_type_name(visitor, type_name));
        }
        for variable in &node.variables {
            walk!(walk_variable_declaration(visitor, variable));
        }
    }
}

walk_fn! {
    walk_variable_declaration(VariableDeclaration) => visit_variable_declaration, leave_variable_declaration,
    |visitor, node| {
        walk!(walk_declared_identifier(visitor, &node.name));
        if let Some(initializer) = &node.initializer {
            walk!(walk_expression(visitor, initializer));
        }
    }
}

walk_fn! {
    walk_extends_clause(ExtendsClause) => visit_extends_clause, leave_extends_clause,
    |visitor, node| {
        walk!(walk_type_name(visitor, &node.superclass));
    }
}

walk_fn! {
    walk_with_clause(WithClause) => visit_with_clause, leave_with_clause,
    |visitor, node| {
        for mixin in &node.mixins {
            walk!(walk_type_name(visitor, mixin));
        }
    }
}

walk_fn! {
    walk_implements_clause(ImplementsClause) => visit_implements_clause, leave_implements_clause,
    |visitor, node| {
        for interface in &node.interfaces {
            walk!(walk_type_name(visitor, interface));
        }
    }
}

walk_fn! {
    walk_type_parameter(TypeParameter) => visit_type_parameter, leave_type_parameter,
    |visitor, node| {
        walk!(walk_declared_identifier(visitor, &node.name));
        if let Some(bound) = &node.bound {
            walk!(walk_type_name(visitor, bound));
        }
    }
}

// ============================================================================
// Class members
// ============================================================================

walk_fn! {
    walk_class_member(ClassMember) => visit_class_member, leave_class_member,
    |visitor, node| {
        walk!(match node {
            ClassMember::Constructor(d) => walk_constructor_declaration(visitor, d),
            ClassMember::Method(d) => walk_method_declaration(visitor, d),
            ClassMember::Field(d) => walk_field_declaration(visitor, d),
        });
    }
}

walk_fn! {
    /// Walk a [`ConstructorDeclaration`].
    ///
    /// The class name at the head and the constructor name are declaration
    /// names; the redirected constructor is a reference.
    walk_constructor_declaration(ConstructorDeclaration) => visit_constructor_declaration, leave_constructor_declaration,
    |visitor, node| {
        walk!(walk_declared_identifier(visitor, &node.return_type));
        if let Some(name) = &node.name {
            walk!(walk_declared_identifier(visitor, name));
        }
        walk!(walk_formal_parameter_list(visitor, &node.parameters));
        for initializer in &node.initializers {
            walk!(walk_constructor_initializer(visitor, initializer));
        }
        if let Some(redirected) = &node.redirected_constructor {
            walk!(walk_constructor_name(visitor, redirected));
        }
        walk!(walk_function_body(visitor, &node.body));
    }
}

walk_fn! {
    walk_constructor_initializer(ConstructorInitializer) => visit_constructor_initializer, leave_constructor_initializer,
    |visitor, node| {
        walk!(match node {
            ConstructorInitializer::Field(i) => walk_constructor_field_initializer(visitor, i),
            ConstructorInitializer::Redirecting(i) => {
                walk_redirecting_constructor_invocation(visitor, i)
            }
            ConstructorInitializer::Super(i) => walk_super_constructor_invocation(visitor, i),
        });
    }
}

walk_fn! {
    walk_constructor_field_initializer(ConstructorFieldInitializer) => visit_constructor_field_initializer, leave_constructor_field_initializer,
    |visitor, node| {
        walk!(walk_simple_identifier(visitor, &node.field_name));
        walk!(walk_expression(visitor, &node.expression));
    }
}

walk_fn! {
    walk_redirecting_constructor_invocation(RedirectingConstructorInvocation) => visit_redirecting_constructor_invocation, leave_redirecting_constructor_invocation,
    |visitor, node| {
        if let Some(name) = &node.constructor_name {
            walk!(walk_simple_identifier(visitor, name));
        }
        walk!(walk_argument_list(visitor, &node.arguments));
    }
}

walk_fn! {
    walk_super_constructor_invocation(SuperConstructorInvocation) => visit_super_constructor_invocation, leave_super_constructor_invocation,
    |visitor, node| {
        if let Some(name) = &node.constructor_name {
            walk!(walk_simple_identifier(visitor, name));
        }
        walk!(walk_argument_list(visitor, &node.arguments));
    }
}

walk_fn! {
    walk_method_declaration(MethodDeclaration) => visit_method_declaration, leave_method_declaration,
    |visitor, node| {
        if let Some(return_type) = &node.return_type {
            walk!(walk_type_name(visitor, return_type));
        }
        walk!(walk_declared_identifier(visitor, &node.name));
        for type_parameter in &node.type_parameters {
            walk!(walk_type_parameter(visitor, type_parameter));
        }
        if let Some(parameters) = &node.parameters {
            walk!(walk_formal_parameter_list(visitor, parameters));
        }
        walk!(walk_function_body(visitor, &node.body));
    }
}

walk_fn! {
    walk_field_declaration(FieldDeclaration) => visit_field_declaration, leave_field_declaration,
    |visitor, node| {
        walk!(walk_variable_declaration_list(visitor, &node.fields));
    }
}

// ============================================================================
// Parameters
// ============================================================================

walk_fn! {
    walk_formal_parameter_list(FormalParameterList) => visit_formal_parameter_list, leave_formal_parameter_list,
    |visitor, node| {
        for parameter in &node.parameters {
            walk!(walk_formal_parameter(visitor, parameter));
        }
    }
}

walk_fn! {
    walk_formal_parameter(FormalParameter) => visit_formal_parameter, leave_formal_parameter,
    |visitor, node| {
        walk!(match node {
            FormalParameter::Simple(p) => walk_simple_formal_parameter(visitor, p),
            FormalParameter::FieldFormal(p) => walk_field_formal_parameter(visitor, p),
            FormalParameter::Default(p) => walk_default_formal_parameter(visitor, p),
        });
    }
}

walk_fn! {
    walk_simple_formal_parameter(SimpleFormalParameter) => visit_simple_formal_parameter, leave_simple_formal_parameter,
    |visitor, node| {
        if let Some(type_name) = &node.type_name {
            walk!(walk_type_name(visitor, type_name));
        }
        walk!(walk_declared_identifier(visitor, &node.identifier));
    }
}

walk_fn! {
    walk_field_formal_parameter(FieldFormalParameter) => visit_field_formal_parameter, leave_field_formal_parameter,
    |visitor, node| {
        if let Some(type_name) = &node.type_name {
            walk!(walk_type_name(visitor, type_name));
        }
        walk!(walk_declared_identifier(visitor, &node.identifier));
    }
}

walk_fn! {
    walk_default_formal_parameter(DefaultFormalParameter) => visit_default_formal_parameter, leave_default_formal_parameter,
    |visitor, node| {
        walk!(walk_formal_parameter(visitor, &node.parameter));
        if let Some(value) = &node.default_value {
            walk!(walk_expression(visitor, value));
        }
    }
}

// ============================================================================
// Bodies and statements
// ============================================================================

walk_fn! {
    walk_function_body(FunctionBody) => visit_function_body, leave_function_body,
    |visitor, node| {
        match node {
            FunctionBody::Block(block) => walk!(walk_block(visitor, block)),
            FunctionBody::Expression(expression) => walk!(walk_expression(visitor, expression)),
            FunctionBody::Empty => {}
        }
    }
}

walk_fn! {
    walk_block(Block) => visit_block, leave_block,
    |visitor, node| {
        for statement in &node.statements {
            walk!(walk_statement(visitor, statement));
        }
    }
}

walk_fn! {
    /// Walk a [`Statement`], dispatching to the concrete statement walk.
    walk_statement(Statement) => visit_statement, leave_statement,
    |visitor, node| {
        walk!(match node {
            Statement::Block(s) => walk_block(visitor, s),
            Statement::Expression(e) => walk_expression(visitor, e),
            Statement::VariableDeclaration(s) => walk_variable_declaration_list(visitor, s),
            Statement::FunctionDeclaration(s) => walk_function_declaration(visitor, s),
            Statement::Return(s) => walk_return_statement(visitor, s),
            Statement::If(s) => walk_if_statement(visitor, s),
            Statement::While(s) => walk_while_statement(visitor, s),
            Statement::Labeled(s) => walk_labeled_statement(visitor, s),
            Statement::Break(s) => walk_break_statement(visitor, s),
            Statement::Continue(s) => walk_continue_statement(visitor, s),
        });
    }
}

walk_fn! {
    walk_return_statement(ReturnStatement) => visit_return_statement, leave_return_statement,
    |visitor, node| {
        if let Some(expression) = &node.expression {
            walk!(walk_expression(visitor, expression));
        }
    }
}

walk_fn! {
    walk_if_statement(IfStatement) => visit_if_statement, leave_if_statement,
    |visitor, node| {
        walk!(walk_expression(visitor, &node.condition));
        walk!(walk_statement(visitor, &node.then_statement));
        if let Some(else_statement) = &node.else_statement {
            walk!(walk_statement(visitor, else_statement));
        }
    }
}

walk_fn! {
    walk_while_statement(WhileStatement) => visit_while_statement, leave_while_statement,
    |visitor, node| {
        walk!(walk_expression(visitor, &node.condition));
        walk!(walk_statement(visitor, &node.body));
    }
}

walk_fn! {
    walk_labeled_statement(LabeledStatement) => visit_labeled_statement, leave_labeled_statement,
    |visitor, node| {
        for label in &node.labels {
            walk!(walk_declared_identifier(visitor, label));
        }
        walk!(walk_statement(visitor, &node.statement));
    }
}

walk_fn! {
    walk_break_statement(BreakStatement) => visit_break_statement, leave_break_statement,
    |visitor, node| {
        if let Some(label) = &node.label {
            walk!(walk_simple_identifier(visitor, label));
        }
    }
}

walk_fn! {
    walk_continue_statement(ContinueStatement) => visit_continue_statement, leave_continue_statement,
    |visitor, node| {
        if let Some(label) = &node.label {
            walk!(walk_simple_identifier(visitor, label));
        }
    }
}

// ============================================================================
// Expressions
// ============================================================================

walk_fn! {
    /// Walk an [`Expression`], dispatching to the concrete expression walk.
    walk_expression(Expression) => visit_expression, leave_expression,
    |visitor, node| {
        walk!(match node {
            Expression::Identifier(e) => walk_simple_identifier(visitor, e),
            Expression::PrefixedIdentifier(e) => walk_prefixed_identifier(visitor, e),
            Expression::PropertyAccess(e) => walk_property_access(visitor, e),
            Expression::MethodInvocation(e) => walk_method_invocation(visitor, e),
            Expression::InstanceCreation(e) => walk_instance_creation(visitor, e),
            Expression::Binary(e) => walk_binary_expression(visitor, e),
            Expression::Assignment(e) => walk_assignment_expression(visitor, e),
            Expression::Prefix(e) => walk_prefix_expression(visitor, e),
            Expression::Postfix(e) => walk_postfix_expression(visitor, e),
            Expression::Index(e) => walk_index_expression(visitor, e),
            Expression::Named(e) => walk_named_expression(visitor, e),
            Expression::Parenthesized(e) => walk_parenthesized_expression(visitor, e),
            Expression::Conditional(e) => walk_conditional_expression(visitor, e),
            Expression::Literal(e) => walk_literal(visitor, e),
            Expression::This(_) | Expression::Super(_) => VisitResult::Continue,
        });
    }
}

walk_fn! {
    walk_prefixed_identifier(PrefixedIdentifier) => visit_prefixed_identifier, leave_prefixed_identifier,
    |visitor, node| {
        walk!(walk_simple_identifier(visitor, &node.prefix));
        walk!(walk_simple_identifier(visitor, &node.identifier));
    }
}

walk_fn! {
    walk_property_access(PropertyAccess) => visit_property_access, leave_property_access,
    |visitor, node| {
        walk!(walk_expression(visitor, &node.target));
        walk!(walk_simple_identifier(visitor, &node.property_name));
    }
}

walk_fn! {
    walk_method_invocation(MethodInvocation) => visit_method_invocation, leave_method_invocation,
    |visitor, node| {
        if let Some(target) = &node.target {
            walk!(walk_expression(visitor, target));
        }
        walk!(walk_simple_identifier(visitor, &node.method_name));
        walk!(walk_argument_list(visitor, &node.arguments));
    }
}

walk_fn! {
    walk_instance_creation(InstanceCreationExpression) => visit_instance_creation, leave_instance_creation,
    |visitor, node| {
        walk!(walk_constructor_name(visitor, &node.constructor_name));
        walk!(walk_argument_list(visitor, &node.arguments));
    }
}

walk_fn! {
    walk_binary_expression(BinaryExpression) => visit_binary_expression, leave_binary_expression,
    |visitor, node| {
        walk!(walk_expression(visitor, &node.left));
        walk!(walk_expression(visitor, &node.right));
    }
}

walk_fn! {
    walk_assignment_expression(AssignmentExpression) => visit_assignment_expression, leave_assignment_expression,
    |visitor, node| {
        walk!(walk_expression(visitor, &node.left));
        walk!(walk_expression(visitor, &node.right));
    }
}

walk_fn! {
    walk_prefix_expression(PrefixExpression) => visit_prefix_expression, leave_prefix_expression,
    |visitor, node| {
        walk!(walk_expression(visitor, &node.operand));
    }
}

walk_fn! {
    walk_postfix_expression(PostfixExpression) => visit_postfix_expression, leave_postfix_expression,
    |visitor, node| {
        walk!(walk_expression(visitor, &node.operand));
    }
}

walk_fn! {
    walk_index_expression(IndexExpression) => visit_index_expression, leave_index_expression,
    |visitor, node| {
        walk!(walk_expression(visitor, &node.target));
        walk!(walk_expression(visitor, &node.index));
    }
}

walk_fn! {
    walk_named_expression(NamedExpression) => visit_named_expression, leave_named_expression,
    |visitor, node| {
        walk!(walk_label(visitor, &node.name));
        walk!(walk_expression(visitor, &node.expression));
    }
}

walk_fn! {
    walk_label(Label) => visit_label, leave_label,
    |visitor, node| {
        walk!(walk_simple_identifier(visitor, &node.label));
    }
}

walk_fn! {
    walk_parenthesized_expression(ParenthesizedExpression) => visit_parenthesized_expression, leave_parenthesized_expression,
    |visitor, node| {
        walk!(walk_expression(visitor, &node.expression));
    }
}

walk_fn! {
    walk_conditional_expression(ConditionalExpression) => visit_conditional_expression, leave_conditional_expression,
    |visitor, node| {
        walk!(walk_expression(visitor, &node.condition));
        walk!(walk_expression(visitor, &node.then_expression));
        walk!(walk_expression(visitor, &node.else_expression));
    }
}

walk_fn! {
    walk_literal(Literal) => visit_literal, leave_literal,
    |visitor, node| {
        if let Literal::String(string) = node {
            walk!(walk_string_literal(visitor, string));
        }
    }
}

walk_fn! {
    walk_argument_list(ArgumentList) => visit_argument_list, leave_argument_list,
    |visitor, node| {
        for argument in &node.arguments {
            walk!(walk_expression(visitor, argument));
        }
    }
}

walk_fn! {
    walk_string_literal(StringLiteral) => visit_string_literal, leave_string_literal,
    |_visitor, _node| {}
}

// ============================================================================
// Names and types
// ============================================================================

walk_fn! {
    walk_simple_identifier(SimpleIdentifier) => visit_simple_identifier, leave_simple_identifier,
    |_visitor, _node| {}
}

walk_fn! {
    walk_declared_identifier(SimpleIdentifier) => visit_declared_identifier, leave_declared_identifier,
    |_visitor, _node| {}
}

walk_fn! {
    /// Walk a [`TypeName`]: the name identifiers, then type arguments.
    walk_type_name(TypeName) => visit_type_name, leave_type_name,
    |visitor, node| {
        match &node.name {
            Identifier::Simple(simple) => walk!(walk_simple_identifier(visitor, simple)),
            Identifier::Prefixed(prefixed) => walk!(walk_prefixed_identifier(visitor, prefixed)),
        }
        for argument in &node.type_arguments {
            walk!(walk_type_name(visitor, argument));
        }
    }
}

walk_fn! {
    walk_constructor_name(ConstructorName) => visit_constructor_name, leave_constructor_name,
    |visitor, node| {
        walk!(walk_type_name(visitor, &node.type_name));
        if let Some(name) = &node.name {
            walk!(walk_simple_identifier(visitor, name));
        }
    }
}
