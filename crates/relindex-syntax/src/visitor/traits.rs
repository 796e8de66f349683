// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor trait definition for resolved tree traversal.

use crate::nodes::{
    // Unit and directives
    CompilationUnit, Directive, LibraryDirective, ImportDirective, ExportDirective, PartDirective,
    PartOfDirective, Combinator, LibraryIdentifier,
    // Declarations
    CompilationUnitMember, ClassDeclaration, ClassTypeAlias, EnumDeclaration, FunctionDeclaration,
    FunctionTypeAlias, VariableDeclarationList, VariableDeclaration, ExtendsClause, WithClause,
    ImplementsClause, TypeParameter,
    // Class members
    ClassMember, ConstructorDeclaration, ConstructorInitializer, ConstructorFieldInitializer,
    RedirectingConstructorInvocation, SuperConstructorInvocation, MethodDeclaration,
    FieldDeclaration,
    // Parameters
    FormalParameterList, FormalParameter, SimpleFormalParameter, FieldFormalParameter,
    DefaultFormalParameter,
    // Statements
    FunctionBody, Block, Statement, ReturnStatement, IfStatement, WhileStatement,
    LabeledStatement, BreakStatement, ContinueStatement,
    // Expressions
    Expression, SimpleIdentifier, PrefixedIdentifier, PropertyAccess, MethodInvocation,
    InstanceCreationExpression, BinaryExpression, AssignmentExpression, PrefixExpression,
    PostfixExpression, IndexExpression, NamedExpression, Label, ParenthesizedExpression,
    ConditionalExpression, Literal, ArgumentList, TypeName, ConstructorName, StringLiteral,
};

/// Result of visiting a node - controls traversal behavior.
///
/// When a visitor method returns a `VisitResult`, it controls how the walker
/// proceeds with traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisitResult {
    /// Continue traversal into children.
    ///
    /// After visiting children, `leave_*` will be called for this node.
    #[default]
    Continue,

    /// Skip children, continue with siblings.
    ///
    /// The walker will not descend into this node's children, but `leave_*`
    /// will still be called for this node.
    SkipChildren,

    /// Stop traversal entirely.
    ///
    /// No further `visit_*` or `leave_*` methods will be called. The walk
    /// function will return immediately.
    Stop,
}

/// Macro to generate visitor trait method signatures.
///
/// This macro generates pairs of `visit_*` and `leave_*` methods with default
/// implementations that return `VisitResult::Continue` and do nothing, respectively.
///
/// # Usage
///
/// ```ignore
/// visitor_methods! {
///     // Generates visit_type_name and leave_type_name for TypeName
///     type_name: TypeName,
/// }
/// ```
macro_rules! visitor_methods {
    (
        $(
            $(#[$meta:meta])*
            $base_name:ident : $node_type:ty
        ),* $(,)?
    ) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[doc = concat!("Visit a [`", stringify!($node_type), "`] node.")]
                #[doc = ""]
                #[doc = "Called before descending into children. Return `VisitResult` to control traversal."]
                #[allow(unused_variables)]
                fn [<visit_ $base_name>](&mut self, node: &$node_type) -> VisitResult {
                    VisitResult::Continue
                }

                $(#[$meta])*
                #[doc = concat!("Leave a [`", stringify!($node_type), "`] node.")]
                #[doc = ""]
                #[doc = "Called after all children have been visited. Called even if `SkipChildren` was returned."]
                #[allow(unused_variables)]
                fn [<leave_ $base_name>](&mut self, node: &$node_type) {}
            )*
        }
    };
}

/// Immutable visitor for resolved tree traversal.
///
/// Implement this trait to traverse a tree without modifying it. Each node
/// category has a corresponding `visit_*` and `leave_*` method pair; every
/// default visits children, so an implementation only overrides the
/// categories it cares about.
///
/// # Traversal Order
///
/// - `visit_*` is called in **pre-order** (before children)
/// - `leave_*` is called in **post-order** (after children)
/// - Children are visited in source order
///
/// # Control Flow
///
/// - Return `VisitResult::Continue` to traverse into children
/// - Return `VisitResult::SkipChildren` to skip children (but `leave_*` still called)
/// - Return `VisitResult::Stop` to halt traversal immediately
///
/// # Example
///
/// ```ignore
/// use relindex_syntax::visitor::{Visitor, VisitResult};
/// use relindex_syntax::nodes::SimpleIdentifier;
///
/// struct NameCollector {
///     names: Vec<String>,
/// }
///
/// impl Visitor for NameCollector {
///     fn visit_simple_identifier(&mut self, node: &SimpleIdentifier) -> VisitResult {
///         self.names.push(node.name().to_string());
///         VisitResult::Continue
///     }
/// }
/// ```
pub trait Visitor {
    // Unit and directives
    visitor_methods! {
        compilation_unit: CompilationUnit,
        directive: Directive,
        library_directive: LibraryDirective,
        import_directive: ImportDirective,
        export_directive: ExportDirective,
        part_directive: PartDirective,
        part_of_directive: PartOfDirective,
        combinator: Combinator,
        library_identifier: LibraryIdentifier,
    }

    // Top-level declarations
    visitor_methods! {
        compilation_unit_member: CompilationUnitMember,
        class_declaration: ClassDeclaration,
        class_type_alias: ClassTypeAlias,
        enum_declaration: EnumDeclaration,
        function_declaration: FunctionDeclaration,
        function_type_alias: FunctionTypeAlias,
        variable_declaration_list: VariableDeclarationList,
        variable_declaration: VariableDeclaration,
        extends_clause: ExtendsClause,
        with_clause: WithClause,
        implements_clause: ImplementsClause,
        type_parameter: TypeParameter,
    }

    // Class members
    visitor_methods! {
        class_member: ClassMember,
        constructor_declaration: ConstructorDeclaration,
        constructor_initializer: ConstructorInitializer,
        constructor_field_initializer: ConstructorFieldInitializer,
        redirecting_constructor_invocation: RedirectingConstructorInvocation,
        super_constructor_invocation: SuperConstructorInvocation,
        method_declaration: MethodDeclaration,
        field_declaration: FieldDeclaration,
    }

    // Parameters
    visitor_methods! {
        formal_parameter_list: FormalParameterList,
        formal_parameter: FormalParameter,
        simple_formal_parameter: SimpleFormalParameter,
        field_formal_parameter: FieldFormalParameter,
        default_formal_parameter: DefaultFormalParameter,
    }

    // Bodies and statements
    visitor_methods! {
        function_body: FunctionBody,
        block: Block,
        statement: Statement,
        return_statement: ReturnStatement,
        if_statement: IfStatement,
        while_statement: WhileStatement,
        labeled_statement: LabeledStatement,
        break_statement: BreakStatement,
        continue_statement: ContinueStatement,
    }

    // Expressions
    visitor_methods! {
        expression: Expression,
        prefixed_identifier: PrefixedIdentifier,
        property_access: PropertyAccess,
        method_invocation: MethodInvocation,
        instance_creation: InstanceCreationExpression,
        binary_expression: BinaryExpression,
        assignment_expression: AssignmentExpression,
        prefix_expression: PrefixExpression,
        postfix_expression: PostfixExpression,
        index_expression: IndexExpression,
        named_expression: NamedExpression,
        label: Label,
        parenthesized_expression: ParenthesizedExpression,
        conditional_expression: ConditionalExpression,
        literal: Literal,
        argument_list: ArgumentList,
        string_literal: StringLiteral,
    }

    // Names and types
    visitor_methods! {
        /// Identifiers used as references.
        simple_identifier: SimpleIdentifier,
        /// Identifiers naming the element declared at this site.
        declared_identifier: SimpleIdentifier,
        type_name: TypeName,
        constructor_name: ConstructorName,
    }
}
