/*
 * estree_value.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Conversion of frontmatter values into ESTree literal expressions.
//!
//! The result evaluates to a value structurally equal to the input:
//!
//! - negative numbers (and `-0`) become `UnaryExpression("-", n)`, since an
//!   ESTree numeric `Literal` is never negative
//! - `NaN` and `Infinity` become identifiers
//! - dates become `new Date("...")`
//! - object keys that are identifier names become `Identifier` keys, other
//!   keys string `Literal` keys; `__proto__` is emitted as a computed key so
//!   that it defines an own property instead of setting the prototype
//!
//! Values are owned trees, so there is no cycle to guard against.

use crate::identifier::is_identifier_name;
use crate::value::FrontmatterValue;
use mdx_ast::estree::{
    ArrayExpression, Expression, Identifier, Literal, NewExpression, ObjectExpression, Property,
    PropertyKey,
};

pub fn value_to_estree(value: &FrontmatterValue) -> Expression {
    match value {
        FrontmatterValue::Undefined => Expression::identifier("undefined"),
        FrontmatterValue::Null => Expression::null(),
        FrontmatterValue::Bool(b) => Expression::literal(*b),
        FrontmatterValue::Integer(i) => integer_to_estree(*i),
        FrontmatterValue::Float(f) => float_to_estree(*f),
        FrontmatterValue::String(s) => Expression::literal(s.as_str()),
        FrontmatterValue::Date(text) => Expression::New(NewExpression {
            callee: Box::new(Expression::identifier("Date")),
            arguments: vec![Expression::literal(text.as_str())],
        }),
        FrontmatterValue::Array(items) => Expression::Array(ArrayExpression {
            elements: items.iter().map(value_to_estree).collect(),
        }),
        FrontmatterValue::Object(map) => Expression::Object(ObjectExpression {
            properties: map
                .iter()
                .map(|(key, value)| property(key, value_to_estree(value)))
                .collect(),
        }),
    }
}

fn integer_to_estree(i: i64) -> Expression {
    if i >= 0 {
        return Expression::literal(i);
    }
    match i.checked_neg() {
        Some(magnitude) => Expression::negate(Expression::literal(magnitude)),
        // i64::MIN has no positive i64 counterpart
        None => Expression::negate(Expression::literal(i.unsigned_abs() as f64)),
    }
}

fn float_to_estree(f: f64) -> Expression {
    if f.is_nan() {
        return Expression::identifier("NaN");
    }
    let magnitude = if f.is_infinite() {
        Expression::identifier("Infinity")
    } else {
        Expression::literal(f.abs())
    };
    if f.is_sign_negative() {
        Expression::negate(magnitude)
    } else {
        magnitude
    }
}

fn property(key: &str, value: Expression) -> Property {
    if key == "__proto__" {
        let mut property = Property::init(PropertyKey::Literal(Literal::new(key)), value);
        property.computed = true;
        return property;
    }
    let key = if is_identifier_name(key) {
        PropertyKey::Identifier(Identifier::new(key))
    } else {
        PropertyKey::Literal(Literal::new(key))
    };
    Property::init(key, value)
}
