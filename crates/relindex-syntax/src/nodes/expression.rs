// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Expression nodes, identifiers, and type names.

use serde::{Deserialize, Serialize};

use super::Token;
use crate::element::ElementId;

// ============================================================================
// Identifiers
// ============================================================================

/// A single identifier and the element it resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimpleIdentifier {
    pub token: Token,
    pub static_element: Option<ElementId>,
}

impl SimpleIdentifier {
    /// Create a resolved identifier.
    pub fn new(name: impl Into<String>, offset: u32, element: Option<ElementId>) -> Self {
        SimpleIdentifier {
            token: Token::new(name, offset),
            static_element: element,
        }
    }

    /// The identifier text.
    pub fn name(&self) -> &str {
        &self.token.lexeme
    }

    pub fn offset(&self) -> u32 {
        self.token.offset
    }

    pub fn length(&self) -> u32 {
        self.token.length()
    }

    pub fn end(&self) -> u32 {
        self.token.end()
    }
}

/// `prefix.identifier`, where the prefix is an import prefix or a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixedIdentifier {
    pub prefix: SimpleIdentifier,
    pub period: Token,
    pub identifier: SimpleIdentifier,
}

/// A simple or prefixed identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Identifier {
    Simple(SimpleIdentifier),
    Prefixed(PrefixedIdentifier),
}

impl Identifier {
    /// The rightmost identifier, which names the resolved element.
    pub fn name_identifier(&self) -> &SimpleIdentifier {
        match self {
            Identifier::Simple(simple) => simple,
            Identifier::Prefixed(prefixed) => &prefixed.identifier,
        }
    }

    /// Element the identifier resolved to.
    pub fn static_element(&self) -> Option<ElementId> {
        self.name_identifier().static_element
    }

    pub fn offset(&self) -> u32 {
        match self {
            Identifier::Simple(simple) => simple.offset(),
            Identifier::Prefixed(prefixed) => prefixed.prefix.offset(),
        }
    }

    pub fn end(&self) -> u32 {
        self.name_identifier().end()
    }
}

// ============================================================================
// Types
// ============================================================================

/// A type annotation such as `Map<K, List<V>>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeName {
    pub name: Identifier,
    #[serde(default)]
    pub type_arguments: Vec<TypeName>,
    /// Closing `>` of the type arguments.
    #[serde(default)]
    pub right_bracket: Option<Token>,
}

impl TypeName {
    /// A type name without type arguments.
    pub fn simple(name: impl Into<String>, offset: u32, element: Option<ElementId>) -> Self {
        TypeName {
            name: Identifier::Simple(SimpleIdentifier::new(name, offset, element)),
            type_arguments: Vec::new(),
            right_bracket: None,
        }
    }

    /// Add type arguments closed by the `>` at `right_bracket`.
    pub fn with_type_arguments(mut self, arguments: Vec<TypeName>, right_bracket: u32) -> Self {
        self.type_arguments = arguments;
        self.right_bracket = Some(Token::new(">", right_bracket));
        self
    }

    /// Class-like element the type name refers to.
    pub fn element(&self) -> Option<ElementId> {
        self.name.static_element()
    }

    pub fn offset(&self) -> u32 {
        self.name.offset()
    }

    /// Length of the name, excluding type arguments.
    pub fn name_length(&self) -> u32 {
        self.name.end().saturating_sub(self.name.offset())
    }

    /// End of the whole type, including type arguments.
    pub fn end(&self) -> u32 {
        self.right_bracket
            .as_ref()
            .map_or(self.name.end(), Token::end)
    }
}

/// Constructor reference in `new A.named()` or a redirection `= A.named`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorName {
    pub type_name: TypeName,
    pub period: Option<Token>,
    pub name: Option<SimpleIdentifier>,
    /// Constructor the name resolved to.
    pub static_element: Option<ElementId>,
}

impl ConstructorName {
    /// Unnamed constructor of `type_name`.
    pub fn unnamed(type_name: TypeName, element: Option<ElementId>) -> Self {
        ConstructorName {
            type_name,
            period: None,
            name: None,
            static_element: element,
        }
    }

    /// Named constructor `type_name.name`.
    pub fn named(
        type_name: TypeName,
        period: Token,
        name: SimpleIdentifier,
        element: Option<ElementId>,
    ) -> Self {
        ConstructorName {
            type_name,
            period: Some(period),
            name: Some(name),
            static_element: element,
        }
    }
}

// ============================================================================
// Literals
// ============================================================================

/// A quoted string literal; the lexeme includes the quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub token: Token,
}

impl StringLiteral {
    pub fn new(lexeme: impl Into<String>, offset: u32) -> Self {
        StringLiteral {
            token: Token::new(lexeme, offset),
        }
    }

    pub fn offset(&self) -> u32 {
        self.token.offset
    }

    pub fn length(&self) -> u32 {
        self.token.length()
    }

    /// Literal value without surrounding quotes.
    pub fn value(&self) -> &str {
        let lexeme = self.token.lexeme.as_str();
        lexeme
            .strip_prefix(['\'', '"'])
            .and_then(|s| s.strip_suffix(['\'', '"']))
            .unwrap_or(lexeme)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    Integer(Token),
    Double(Token),
    Boolean(Token),
    Null(Token),
    String(StringLiteral),
}

// ============================================================================
// Expressions
// ============================================================================

/// An expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    Identifier(SimpleIdentifier),
    PrefixedIdentifier(PrefixedIdentifier),
    PropertyAccess(Box<PropertyAccess>),
    MethodInvocation(Box<MethodInvocation>),
    InstanceCreation(Box<InstanceCreationExpression>),
    Binary(Box<BinaryExpression>),
    Assignment(Box<AssignmentExpression>),
    Prefix(Box<PrefixExpression>),
    Postfix(Box<PostfixExpression>),
    Index(Box<IndexExpression>),
    Named(Box<NamedExpression>),
    Parenthesized(Box<ParenthesizedExpression>),
    Conditional(Box<ConditionalExpression>),
    Literal(Literal),
    This(Token),
    Super(Token),
}

/// `(a, b: c)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentList {
    pub left_paren: Token,
    #[serde(default)]
    pub arguments: Vec<Expression>,
    pub right_paren: Token,
}

impl ArgumentList {
    /// Argument list spanning `left..=right`.
    pub fn new(left: u32, arguments: Vec<Expression>, right: u32) -> Self {
        ArgumentList {
            left_paren: Token::new("(", left),
            arguments,
            right_paren: Token::new(")", right),
        }
    }
}

/// `target.property`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyAccess {
    pub target: Expression,
    pub operator: Token,
    pub property_name: SimpleIdentifier,
}

/// `target.method(args)` or `function(args)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodInvocation {
    pub target: Option<Expression>,
    pub operator: Option<Token>,
    /// Invoked name; its `static_element` is the callee.
    pub method_name: SimpleIdentifier,
    pub arguments: ArgumentList,
}

/// `new A.named(args)`, `const A()`, or keyword-less `A()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceCreationExpression {
    pub keyword: Option<Token>,
    pub constructor_name: ConstructorName,
    pub arguments: ArgumentList,
}

/// `left op right`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryExpression {
    pub left: Expression,
    pub operator: Token,
    pub right: Expression,
    /// Operator method the expression resolved to.
    pub static_element: Option<ElementId>,
}

/// `left = right` or compound `left op= right`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentExpression {
    pub left: Expression,
    pub operator: Token,
    pub right: Expression,
    /// Operator method of a compound assignment.
    pub static_element: Option<ElementId>,
}

/// `op operand`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixExpression {
    pub operator: Token,
    pub operand: Expression,
    pub static_element: Option<ElementId>,
}

/// `operand op`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostfixExpression {
    pub operand: Expression,
    pub operator: Token,
    pub static_element: Option<ElementId>,
}

/// `target[index]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexExpression {
    pub target: Expression,
    pub left_bracket: Token,
    pub index: Expression,
    pub right_bracket: Token,
    /// The `[]` or `[]=` method.
    pub static_element: Option<ElementId>,
}

/// Named argument label (`name:`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub label: SimpleIdentifier,
    pub colon: Token,
}

/// `name: expression` in an argument list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedExpression {
    pub name: Label,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParenthesizedExpression {
    pub left_paren: Token,
    pub expression: Expression,
    pub right_paren: Token,
}

/// `condition ? then : otherwise`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalExpression {
    pub condition: Expression,
    pub question: Token,
    pub then_expression: Expression,
    pub colon: Token,
    pub else_expression: Expression,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_literal_value_strips_quotes() {
        assert_eq!(StringLiteral::new("'a.dart'", 0).value(), "a.dart");
        assert_eq!(StringLiteral::new("\"b.dart\"", 0).value(), "b.dart");
    }

    #[test]
    fn prefixed_identifier_names_rightmost() {
        let identifier = Identifier::Prefixed(PrefixedIdentifier {
            prefix: SimpleIdentifier::new("p", 10, None),
            period: Token::new(".", 11),
            identifier: SimpleIdentifier::new("Foo", 12, Some(ElementId(3))),
        });
        assert_eq!(identifier.static_element(), Some(ElementId(3)));
        assert_eq!(identifier.offset(), 10);
        assert_eq!(identifier.end(), 15);
    }

    #[test]
    fn type_name_end_includes_type_arguments() {
        // A<int>
        let bare = TypeName::simple("A", 0, None);
        assert_eq!(bare.end(), 1);
        let generic = bare.with_type_arguments(vec![TypeName::simple("int", 2, None)], 5);
        assert_eq!(generic.end(), 6);
        assert_eq!(generic.name_length(), 1);
    }
}
