/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * mdast and ESTree type definitions for MDX documents.
 *
 * This crate provides pure data types for the two trees an MDX frontmatter
 * transform works with: the Markdown document tree (mdast) it rewrites, and
 * the JavaScript program subset (ESTree) carried inside `mdxjsEsm` nodes.
 * Both serialize to the JSON shape used by the unified/estree ecosystem.
 */

pub mod codegen;
pub mod estree;
pub mod mdast;

// Re-export commonly used types at the crate root
pub use codegen::to_js;
pub use estree::{
    ArrayExpression, Declaration, ExportNamedDeclaration, ExportSpecifier, Expression, Identifier,
    Literal, LiteralValue, ModuleItem, NewExpression, ObjectExpression, Program, Property,
    PropertyKey, PropertyKind, SourceType, UnaryExpression, UnaryOperator, VariableDeclaration,
    VariableDeclarator, VariableKind,
};
pub use mdast::{
    EsmData, LiteralNode, MdxjsEsm, Node, ParentNode, Point, Position, Root, VoidNode,
};
