// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Declarations: top-level members, class members, and formal parameters.
//!
//! A declaration's `name` identifier carries the declared element as its
//! `static_element`. The walker reports these names through
//! `visit_declared_identifier`, never through `visit_simple_identifier`.

use serde::{Deserialize, Serialize};

use super::{
    ArgumentList, ConstructorName, Expression, FunctionBody, SimpleIdentifier, Token, TypeName,
};
use crate::element::ElementId;

// ============================================================================
// Top-level Declarations
// ============================================================================

/// A declaration at the top level of a compilation unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompilationUnitMember {
    Class(ClassDeclaration),
    ClassAlias(ClassTypeAlias),
    Enum(EnumDeclaration),
    Function(FunctionDeclaration),
    FunctionTypeAlias(FunctionTypeAlias),
    TopLevelVariable(VariableDeclarationList),
}

/// `extends Superclass`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendsClause {
    pub keyword: Token,
    pub superclass: TypeName,
}

/// `with M1, M2`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithClause {
    pub keyword: Token,
    pub mixins: Vec<TypeName>,
}

/// `implements I1, I2`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplementsClause {
    pub keyword: Token,
    pub interfaces: Vec<TypeName>,
}

/// `T extends Bound`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParameter {
    pub name: SimpleIdentifier,
    pub bound: Option<TypeName>,
}

/// `class A<T> extends B with M implements I { ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDeclaration {
    pub abstract_keyword: Option<Token>,
    pub class_keyword: Token,
    pub name: SimpleIdentifier,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    pub extends_clause: Option<ExtendsClause>,
    pub with_clause: Option<WithClause>,
    pub implements_clause: Option<ImplementsClause>,
    #[serde(default)]
    pub members: Vec<ClassMember>,
}

impl ClassDeclaration {
    /// A class with no clauses and no members.
    pub fn new(class_keyword: Token, name: SimpleIdentifier) -> Self {
        ClassDeclaration {
            abstract_keyword: None,
            class_keyword,
            name,
            type_parameters: Vec::new(),
            extends_clause: None,
            with_clause: None,
            implements_clause: None,
            members: Vec::new(),
        }
    }

    /// The declared class element.
    pub fn element(&self) -> Option<ElementId> {
        self.name.static_element
    }
}

/// `class C = S with M implements I;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassTypeAlias {
    pub keyword: Token,
    pub name: SimpleIdentifier,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    pub equals: Token,
    pub superclass: TypeName,
    pub with_clause: WithClause,
    pub implements_clause: Option<ImplementsClause>,
    pub semicolon: Token,
}

/// `enum E { a, b }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDeclaration {
    pub keyword: Token,
    pub name: SimpleIdentifier,
    /// Declared constants.
    #[serde(default)]
    pub constants: Vec<SimpleIdentifier>,
}

/// A top-level or local function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub return_type: Option<TypeName>,
    /// `get` or `set` for top-level accessors.
    pub property_keyword: Option<Token>,
    pub name: SimpleIdentifier,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    pub parameters: FormalParameterList,
    pub body: FunctionBody,
}

/// `typedef R F<T>(params);`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionTypeAlias {
    pub keyword: Token,
    pub return_type: Option<TypeName>,
    pub name: SimpleIdentifier,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    pub parameters: FormalParameterList,
    pub semicolon: Token,
}

/// `final T a = 1, b;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDeclarationList {
    /// `var`, `final`, or `const`.
    pub keyword: Option<Token>,
    pub type_name: Option<TypeName>,
    pub variables: Vec<VariableDeclaration>,
}

/// One declared variable in a [`VariableDeclarationList`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub name: SimpleIdentifier,
    pub initializer: Option<Expression>,
}

// ============================================================================
// Class Members
// ============================================================================

/// A member of a class body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassMember {
    Constructor(ConstructorDeclaration),
    Method(MethodDeclaration),
    Field(FieldDeclaration),
}

/// `A.named(this.x) : y = 0, super();` or `factory A() = B;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorDeclaration {
    pub factory_keyword: Option<Token>,
    /// Class name at the head of the declaration.
    pub return_type: SimpleIdentifier,
    pub period: Option<Token>,
    pub name: Option<SimpleIdentifier>,
    /// The declared constructor.
    pub element: Option<ElementId>,
    pub parameters: FormalParameterList,
    #[serde(default)]
    pub initializers: Vec<ConstructorInitializer>,
    /// Target of a redirecting factory (`= B.named`).
    pub redirected_constructor: Option<ConstructorName>,
    pub body: FunctionBody,
}

/// Entry in a constructor initializer list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructorInitializer {
    Field(ConstructorFieldInitializer),
    Redirecting(RedirectingConstructorInvocation),
    Super(SuperConstructorInvocation),
}

/// `this.x = expression` or `x = expression`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorFieldInitializer {
    pub this_keyword: Option<Token>,
    /// Initialized field; its `static_element` is the field.
    pub field_name: SimpleIdentifier,
    pub equals: Token,
    pub expression: Expression,
}

/// `this(args)` or `this.named(args)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectingConstructorInvocation {
    pub this_keyword: Token,
    pub period: Option<Token>,
    pub constructor_name: Option<SimpleIdentifier>,
    pub arguments: ArgumentList,
    /// Constructor the invocation resolved to.
    pub static_element: Option<ElementId>,
}

/// `super(args)` or `super.named(args)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperConstructorInvocation {
    pub super_keyword: Token,
    pub period: Option<Token>,
    pub constructor_name: Option<SimpleIdentifier>,
    pub arguments: ArgumentList,
    /// Constructor the invocation resolved to.
    pub static_element: Option<ElementId>,
}

/// Method, accessor, or operator declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDeclaration {
    /// `static`, `abstract`, or `external`.
    pub modifier_keyword: Option<Token>,
    pub return_type: Option<TypeName>,
    /// `get` or `set`.
    pub property_keyword: Option<Token>,
    pub operator_keyword: Option<Token>,
    pub name: SimpleIdentifier,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    /// `None` for getters.
    pub parameters: Option<FormalParameterList>,
    pub body: FunctionBody,
}

/// `static final int x = 0;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    pub static_keyword: Option<Token>,
    pub fields: VariableDeclarationList,
}

// ============================================================================
// Formal Parameters
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormalParameterList {
    #[serde(default)]
    pub parameters: Vec<FormalParameter>,
}

impl FormalParameterList {
    pub fn new(parameters: Vec<FormalParameter>) -> Self {
        FormalParameterList { parameters }
    }
}

/// A formal parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormalParameter {
    /// `T name`
    Simple(SimpleFormalParameter),
    /// `this.name`
    FieldFormal(FieldFormalParameter),
    /// `[T name = value]` or `{T name: value}`
    Default(Box<DefaultFormalParameter>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleFormalParameter {
    pub type_name: Option<TypeName>,
    pub identifier: SimpleIdentifier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFormalParameter {
    pub type_name: Option<TypeName>,
    pub this_keyword: Token,
    pub period: Token,
    /// The parameter name; its element links to the field.
    pub identifier: SimpleIdentifier,
}

impl FieldFormalParameter {
    /// Start of the parameter (the type, or `this`).
    pub fn offset(&self) -> u32 {
        self.type_name
            .as_ref()
            .map_or(self.this_keyword.offset, |type_name| type_name.offset())
    }

    /// Length from the start of the parameter through its name.
    pub fn length(&self) -> u32 {
        self.identifier.end().saturating_sub(self.offset())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultFormalParameter {
    pub parameter: FormalParameter,
    /// `=` or `:`
    pub separator: Option<Token>,
    pub default_value: Option<Expression>,
}
