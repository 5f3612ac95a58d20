/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Expose MDX frontmatter data as ES module exports.
 */

//! # mdx-frontmatter
//!
//! An mdast transform that turns frontmatter blocks (`yaml`, `toml`, or any
//! block type with a registered parser) into `mdxjsEsm` export nodes, so
//! that the data is importable from the compiled MDX module.
//!
//! ```rust
//! use mdx_ast::{Node, Root, to_js};
//! use mdx_frontmatter::{MdxFrontmatterOptions, transform_frontmatter};
//!
//! let mut root = Root::new(vec![Node::yaml("title: Hello\ntags: [a, b]")]);
//! transform_frontmatter(&mut root, MdxFrontmatterOptions::new()).unwrap();
//!
//! let esm = root.children[0].as_mdxjs_esm().unwrap();
//! assert_eq!(
//!     to_js(esm.program().unwrap()),
//!     r#"export const title = "Hello", tags = ["a", "b"];"#
//! );
//! ```
//!
//! With `name` set, each block is exported as one binding instead:
//!
//! ```rust
//! use mdx_ast::{Node, Root, to_js};
//! use mdx_frontmatter::{MdxFrontmatterOptions, transform_frontmatter};
//!
//! let mut root = Root::new(vec![Node::toml("title = \"Hello\"")]);
//! let options = MdxFrontmatterOptions::new().with_name("frontmatter");
//! transform_frontmatter(&mut root, options).unwrap();
//!
//! let esm = root.children[0].as_mdxjs_esm().unwrap();
//! assert_eq!(
//!     to_js(esm.program().unwrap()),
//!     r#"export const frontmatter = {title: "Hello"};"#
//! );
//! ```

pub mod error;
pub mod estree_value;
pub mod export;
pub mod frontmatter;
pub mod identifier;
pub mod options;
pub mod parsers;
pub mod transform;
pub mod value;

pub use error::{FrontmatterError, Result};
pub use estree_value::value_to_estree;
pub use export::{create_export, create_import_export};
pub use frontmatter::{MdxFrontmatter, transform_frontmatter};
pub use identifier::is_identifier_name;
pub use options::{ImportSpecifier, MdxFrontmatterOptions};
pub use parsers::{
    BoxError, DEFAULT_PARSERS, DataParseError, FrontmatterParser, ParserRegistry, parse_toml,
    parse_yaml,
};
pub use transform::AstTransform;
pub use value::{FrontmatterRecord, FrontmatterValue};
