// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Function bodies and statements.

use serde::{Deserialize, Serialize};

use super::{Expression, FunctionDeclaration, SimpleIdentifier, Token, VariableDeclarationList};

/// Body of a function, method, or constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum FunctionBody {
    /// `{ ... }`
    Block(Block),
    /// `=> expression;`
    Expression(Expression),
    /// `;`
    #[default]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub statements: Vec<Statement>,
}

/// A statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statement {
    Block(Block),
    Expression(Expression),
    /// `var a = 1, b;`
    VariableDeclaration(VariableDeclarationList),
    /// Function declared inside another function body.
    FunctionDeclaration(Box<FunctionDeclaration>),
    Return(ReturnStatement),
    If(Box<IfStatement>),
    While(Box<WhileStatement>),
    Labeled(Box<LabeledStatement>),
    Break(BreakStatement),
    Continue(ContinueStatement),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnStatement {
    pub keyword: Token,
    pub expression: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfStatement {
    pub condition: Expression,
    pub then_statement: Statement,
    pub else_statement: Option<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhileStatement {
    pub condition: Expression,
    pub body: Statement,
}

/// `outer: inner: statement`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledStatement {
    /// Declared labels.
    pub labels: Vec<SimpleIdentifier>,
    pub statement: Statement,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakStatement {
    pub keyword: Token,
    pub label: Option<SimpleIdentifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinueStatement {
    pub keyword: Token,
    pub label: Option<SimpleIdentifier>,
}
