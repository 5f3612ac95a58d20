/*
 * estree.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The ESTree subset needed to express module exports of literal data.
//!
//! Every struct serializes with its ESTree `type` field (the struct name),
//! and the enums are untagged unions over those structs, so the JSON output
//! is exactly what JavaScript tooling expects in `mdxjsEsm.data.estree`.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    #[serde(rename = "sourceType")]
    pub source_type: SourceType,
    pub body: Vec<ModuleItem>,
}

impl Program {
    pub fn new(source_type: SourceType, body: Vec<ModuleItem>) -> Self {
        Self { source_type, body }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Module,
    Script,
}

/// A top-level statement of a module program.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModuleItem {
    ExportNamedDeclaration(ExportNamedDeclaration),
}

/// `export const ...;` (declaration form) or
/// `export { ... } from "...";` (specifier form).
///
/// ESTree always carries all three fields; the unused ones are `null` or empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ExportNamedDeclaration {
    pub declaration: Option<Declaration>,
    pub specifiers: Vec<ExportSpecifier>,
    pub source: Option<Literal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Declaration {
    Variable(VariableDeclaration),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct VariableDeclaration {
    pub kind: VariableKind,
    pub declarations: Vec<VariableDeclarator>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Const,
    Let,
    Var,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct VariableDeclarator {
    pub id: Identifier,
    pub init: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ExportSpecifier {
    pub local: Identifier,
    pub exported: Identifier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Literal {
    pub value: LiteralValue,
}

impl Literal {
    pub fn new(value: impl Into<LiteralValue>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// The primitive carried by a [`Literal`].
///
/// Integers are kept apart from floats so that values outside the
/// 53-bit safe range survive serialization exactly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Number(f64),
    String(String),
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        LiteralValue::Boolean(value)
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        LiteralValue::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        LiteralValue::Number(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        LiteralValue::String(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        LiteralValue::String(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Expression {
    Identifier(Identifier),
    Literal(Literal),
    Array(ArrayExpression),
    Object(ObjectExpression),
    Unary(UnaryExpression),
    New(NewExpression),
}

impl Expression {
    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier::new(name))
    }

    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Expression::Literal(Literal::new(value))
    }

    pub fn null() -> Self {
        Expression::Literal(Literal {
            value: LiteralValue::Null,
        })
    }

    /// `-argument`
    pub fn negate(argument: Expression) -> Self {
        Expression::Unary(UnaryExpression {
            operator: UnaryOperator::Minus,
            prefix: true,
            argument: Box::new(argument),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ArrayExpression {
    pub elements: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ObjectExpression {
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Property {
    pub key: PropertyKey,
    pub value: Expression,
    pub kind: PropertyKind,
    pub method: bool,
    pub shorthand: bool,
    pub computed: bool,
}

impl Property {
    /// A plain `key: value` property.
    pub fn init(key: PropertyKey, value: Expression) -> Self {
        Self {
            key,
            value,
            kind: PropertyKind::Init,
            method: false,
            shorthand: false,
            computed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyKey {
    Identifier(Identifier),
    Literal(Literal),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Init,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub prefix: bool,
    pub argument: Box<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOperator {
    #[serde(rename = "-")]
    Minus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct NewExpression {
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
}
