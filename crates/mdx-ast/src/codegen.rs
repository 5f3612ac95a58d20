/*
 * codegen.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! JavaScript source writer for the ESTree subset in [`crate::estree`].
//!
//! Output is compact and single-line per statement:
//!
//! ```text
//! export const title = "Hi", tags = ["a", "b"];
//! export {default as layout} from "./Layout.jsx";
//! ```

use crate::estree::{
    Declaration, ExportNamedDeclaration, ExportSpecifier, Expression, Literal, LiteralValue,
    ModuleItem, Program, Property, PropertyKey, UnaryOperator, VariableDeclaration, VariableKind,
};
use std::fmt::{self, Write};

/// Render a program as JavaScript source, one statement per line.
pub fn to_js(program: &Program) -> String {
    program.to_string()
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_program(self, f)
    }
}

pub fn write_program<W: Write>(program: &Program, out: &mut W) -> fmt::Result {
    for (i, item) in program.body.iter().enumerate() {
        if i > 0 {
            out.write_char('\n')?;
        }
        match item {
            ModuleItem::ExportNamedDeclaration(export) => write_export(export, out)?,
        }
    }
    Ok(())
}

fn write_export<W: Write>(export: &ExportNamedDeclaration, out: &mut W) -> fmt::Result {
    out.write_str("export ")?;
    if let Some(Declaration::Variable(declaration)) = &export.declaration {
        write_variable_declaration(declaration, out)?;
        return out.write_char(';');
    }

    out.write_char('{')?;
    for (i, specifier) in export.specifiers.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_specifier(specifier, out)?;
    }
    out.write_char('}')?;
    if let Some(source) = &export.source {
        out.write_str(" from ")?;
        write_literal(source, out)?;
    }
    out.write_char(';')
}

fn write_specifier<W: Write>(specifier: &ExportSpecifier, out: &mut W) -> fmt::Result {
    if specifier.local.name == specifier.exported.name {
        out.write_str(&specifier.local.name)
    } else {
        write!(out, "{} as {}", specifier.local.name, specifier.exported.name)
    }
}

fn write_variable_declaration<W: Write>(
    declaration: &VariableDeclaration,
    out: &mut W,
) -> fmt::Result {
    out.write_str(match declaration.kind {
        VariableKind::Const => "const ",
        VariableKind::Let => "let ",
        VariableKind::Var => "var ",
    })?;
    for (i, declarator) in declaration.declarations.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        out.write_str(&declarator.id.name)?;
        if let Some(init) = &declarator.init {
            out.write_str(" = ")?;
            write_expression(init, out)?;
        }
    }
    Ok(())
}

pub fn write_expression<W: Write>(expression: &Expression, out: &mut W) -> fmt::Result {
    match expression {
        Expression::Identifier(identifier) => out.write_str(&identifier.name),
        Expression::Literal(literal) => write_literal(literal, out),
        Expression::Array(array) => {
            out.write_char('[')?;
            for (i, element) in array.elements.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_expression(element, out)?;
            }
            out.write_char(']')
        }
        Expression::Object(object) => {
            out.write_char('{')?;
            for (i, property) in object.properties.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_property(property, out)?;
            }
            out.write_char('}')
        }
        Expression::Unary(unary) => {
            match unary.operator {
                UnaryOperator::Minus => out.write_char('-')?,
            }
            // `--x` would be a decrement
            if matches!(*unary.argument, Expression::Unary(_)) {
                out.write_char(' ')?;
            }
            write_expression(&unary.argument, out)
        }
        Expression::New(new) => {
            out.write_str("new ")?;
            write_expression(&new.callee, out)?;
            out.write_char('(')?;
            for (i, argument) in new.arguments.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_expression(argument, out)?;
            }
            out.write_char(')')
        }
    }
}

fn write_property<W: Write>(property: &Property, out: &mut W) -> fmt::Result {
    if property.computed {
        out.write_char('[')?;
    }
    match &property.key {
        PropertyKey::Identifier(identifier) => out.write_str(&identifier.name)?,
        PropertyKey::Literal(literal) => write_literal(literal, out)?,
    }
    if property.computed {
        out.write_char(']')?;
    }
    out.write_str(": ")?;
    write_expression(&property.value, out)
}

fn write_literal<W: Write>(literal: &Literal, out: &mut W) -> fmt::Result {
    match &literal.value {
        LiteralValue::Null => out.write_str("null"),
        LiteralValue::Boolean(value) => write!(out, "{}", value),
        LiteralValue::Integer(value) => write!(out, "{}", value),
        LiteralValue::Number(value) if value.is_nan() => out.write_str("NaN"),
        LiteralValue::Number(value) if value.is_infinite() => {
            out.write_str(if *value > 0.0 { "Infinity" } else { "-Infinity" })
        }
        LiteralValue::Number(value) => write!(out, "{}", value),
        LiteralValue::String(value) => {
            // JSON string syntax is a subset of JavaScript string syntax
            let quoted = serde_json::to_string(value).map_err(|_| fmt::Error)?;
            out.write_str(&quoted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estree::{
        ArrayExpression, Identifier, NewExpression, ObjectExpression, SourceType,
        VariableDeclarator,
    };

    fn export_const(declarations: Vec<(&str, Expression)>) -> ModuleItem {
        ModuleItem::ExportNamedDeclaration(ExportNamedDeclaration {
            declaration: Some(Declaration::Variable(VariableDeclaration {
                kind: VariableKind::Const,
                declarations: declarations
                    .into_iter()
                    .map(|(name, init)| VariableDeclarator {
                        id: Identifier::new(name),
                        init: Some(init),
                    })
                    .collect(),
            })),
            specifiers: vec![],
            source: None,
        })
    }

    fn expr_js(expression: &Expression) -> String {
        let mut out = String::new();
        write_expression(expression, &mut out).unwrap();
        out
    }

    #[test]
    fn test_export_const_multiple_declarators() {
        let program = Program::new(
            SourceType::Module,
            vec![export_const(vec![
                ("a", Expression::literal(1)),
                ("b", Expression::literal("s")),
            ])],
        );
        insta::assert_snapshot!(to_js(&program), @r#"export const a = 1, b = "s";"#);
    }

    #[test]
    fn test_reexport_default() {
        let program = Program::new(
            SourceType::Module,
            vec![ModuleItem::ExportNamedDeclaration(ExportNamedDeclaration {
                declaration: None,
                specifiers: vec![ExportSpecifier {
                    local: Identifier::new("default"),
                    exported: Identifier::new("layout"),
                }],
                source: Some(Literal::new("./Layout.jsx")),
            })],
        );
        insta::assert_snapshot!(to_js(&program), @r#"export {default as layout} from "./Layout.jsx";"#);
    }

    #[test]
    fn test_statements_on_separate_lines() {
        let program = Program::new(
            SourceType::Module,
            vec![
                export_const(vec![("a", Expression::literal(true))]),
                export_const(vec![("b", Expression::null())]),
            ],
        );
        assert_eq!(to_js(&program), "export const a = true;\nexport const b = null;");
    }

    #[test]
    fn test_nested_expressions() {
        let expression = Expression::Object(ObjectExpression {
            properties: vec![
                Property::init(
                    PropertyKey::Identifier(Identifier::new("tags")),
                    Expression::Array(ArrayExpression {
                        elements: vec![Expression::literal("a"), Expression::literal(2.5)],
                    }),
                ),
                Property::init(
                    PropertyKey::Literal(Literal::new("with space")),
                    Expression::negate(Expression::literal(3)),
                ),
            ],
        });
        assert_eq!(expr_js(&expression), r#"{tags: ["a", 2.5], "with space": -3}"#);
    }

    #[test]
    fn test_computed_key_and_new_expression() {
        let mut property = Property::init(
            PropertyKey::Literal(Literal::new("__proto__")),
            Expression::New(NewExpression {
                callee: Box::new(Expression::identifier("Date")),
                arguments: vec![Expression::literal("1979-05-27T07:32:00Z")],
            }),
        );
        property.computed = true;
        let expression = Expression::Object(ObjectExpression {
            properties: vec![property],
        });
        assert_eq!(
            expr_js(&expression),
            r#"{["__proto__"]: new Date("1979-05-27T07:32:00Z")}"#
        );
    }

    #[test]
    fn test_string_escaping() {
        assert_eq!(
            expr_js(&Expression::literal("say \"hi\"\n")),
            r#""say \"hi\"\n""#
        );
    }

    #[test]
    fn test_double_negation_is_not_decrement() {
        let expression = Expression::negate(Expression::negate(Expression::literal(1)));
        assert_eq!(expr_js(&expression), "- -1");
    }

    #[test]
    fn test_empty_composites() {
        assert_eq!(
            expr_js(&Expression::Array(ArrayExpression { elements: vec![] })),
            "[]"
        );
        assert_eq!(
            expr_js(&Expression::Object(ObjectExpression { properties: vec![] })),
            "{}"
        );
    }
}
