/*
 * frontmatter.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transform that exposes frontmatter data as module exports.
 */

//! Frontmatter export transform.
//!
//! For every top-level node whose type has a registered parser, the node's
//! text is parsed and turned into `mdxjsEsm` export nodes:
//!
//! ```text
//! ---                        export {default as layout} from "./Layout.jsx";
//! layout: ./Layout.jsx   →   export const title = "Hi";
//! title: Hi
//! ---
//! ```
//!
//! The generated nodes are prepended to the document, in document order,
//! with each block's re-exports ahead of its data export. Frontmatter
//! nodes themselves are left in place.

use crate::error::{FrontmatterError, Result};
use crate::export::{create_export, create_import_export};
use crate::identifier::is_identifier_name;
use crate::options::{ImportSpecifier, MdxFrontmatterOptions};
use crate::parsers::{DEFAULT_PARSERS, ParserRegistry};
use crate::transform::AstTransform;
use crate::value::{FrontmatterRecord, FrontmatterValue};
use mdx_ast::estree::LiteralValue;
use mdx_ast::mdast::{MdxjsEsm, Node, Root};

/// Transform that exports frontmatter data from an MDX document.
///
/// The transform is configured once and can be applied to any number of
/// documents, from any number of threads.
#[derive(Debug, Clone)]
pub struct MdxFrontmatter {
    options: MdxFrontmatterOptions,
}

impl MdxFrontmatter {
    /// Create the transform. Parsers from `options` are layered over the
    /// built-in `yaml` and `toml` parsers.
    pub fn new(options: MdxFrontmatterOptions) -> Self {
        let parsers = DEFAULT_PARSERS.merged_with(&options.parsers);
        Self {
            options: MdxFrontmatterOptions { parsers, ..options },
        }
    }

    /// The effective parser registry.
    pub fn parsers(&self) -> &ParserRegistry {
        &self.options.parsers
    }

    /// Build the export nodes for a list of top-level nodes, without
    /// modifying anything.
    ///
    /// # Errors
    ///
    /// - [`FrontmatterError::InvalidName`] if the configured name is not an
    ///   identifier name (checked before any node is looked at)
    /// - [`FrontmatterError::Parser`] if a parser fails
    /// - [`FrontmatterError::NotAnObject`] if no name is configured and a
    ///   block's data is not an object
    /// - [`FrontmatterError::InvalidKey`] for a data or import key that is
    ///   not an identifier name
    /// - [`FrontmatterError::InvalidImportSource`] if an import specifier's
    ///   value is an array, object or date
    pub fn exports(&self, children: &[Node]) -> Result<Vec<MdxjsEsm>> {
        self.options.validate()?;

        let mut exports = Vec::new();

        for node in children {
            let Some(parser) = self.options.parsers.get(node.node_type()) else {
                continue;
            };
            let Some(source) = node.literal_value() else {
                tracing::trace!(node_type = node.node_type(), "Skipping frontmatter node without text");
                continue;
            };

            let Some(data) = parser.parse(source).map_err(FrontmatterError::Parser)? else {
                tracing::trace!(node_type = node.node_type(), "Frontmatter parser returned no data");
                continue;
            };

            let before = exports.len();
            self.push_block_exports(data, source, &mut exports)?;
            tracing::debug!(
                node_type = node.node_type(),
                exports = exports.len() - before,
                "Exported frontmatter"
            );
        }

        if let Some(name) = self.options.name() {
            if exports.is_empty() {
                let mut record = FrontmatterRecord::new();
                record.insert(name.to_string(), FrontmatterValue::Undefined);
                exports.push(create_export(&record)?);
            }
        }

        Ok(exports)
    }

    /// Exports for one block's data: re-exports first, in configured order,
    /// then the data export.
    fn push_block_exports(
        &self,
        mut data: FrontmatterValue,
        source: &str,
        exports: &mut Vec<MdxjsEsm>,
    ) -> Result<()> {
        let record = match self.options.name() {
            Some(name) => {
                if let Some(map) = data.as_object_mut() {
                    self.push_import_exports(map, exports)?;
                }
                let mut record = FrontmatterRecord::new();
                record.insert(name.to_string(), data);
                record
            }
            None => {
                let FrontmatterValue::Object(mut map) = data else {
                    return Err(FrontmatterError::NotAnObject(source.to_string()));
                };
                self.push_import_exports(&mut map, exports)?;
                map
            }
        };

        // `export const;` is not a valid program
        if !record.is_empty() {
            exports.push(create_export(&record)?);
        }
        Ok(())
    }

    /// Remove every import specifier key with a truthy value from `map`,
    /// pushing a re-export for it. Primitive values become the module
    /// source unchanged.
    fn push_import_exports(
        &self,
        map: &mut FrontmatterRecord,
        exports: &mut Vec<MdxjsEsm>,
    ) -> Result<()> {
        for ImportSpecifier { key } in &self.options.import_specifiers {
            if !map.get(key).is_some_and(FrontmatterValue::is_truthy) {
                continue;
            }
            let Some(value) = map.shift_remove(key) else {
                continue;
            };
            let source = match value {
                FrontmatterValue::String(path) => LiteralValue::from(path),
                FrontmatterValue::Bool(b) => LiteralValue::from(b),
                FrontmatterValue::Integer(i) => LiteralValue::from(i),
                FrontmatterValue::Float(f) => LiteralValue::from(f),
                other => {
                    return Err(FrontmatterError::InvalidImportSource {
                        key: key.clone(),
                        found: other.type_name(),
                    });
                }
            };
            if !is_identifier_name(key) {
                return Err(FrontmatterError::InvalidKey(key.clone()));
            }
            exports.push(create_import_export(source, key));
        }
        Ok(())
    }
}

impl Default for MdxFrontmatter {
    fn default() -> Self {
        Self::new(MdxFrontmatterOptions::default())
    }
}

impl AstTransform for MdxFrontmatter {
    fn name(&self) -> &str {
        "mdx-frontmatter"
    }

    fn transform(&self, root: &mut Root) -> Result<()> {
        let exports = self.exports(&root.children)?;
        root.children.splice(0..0, exports.into_iter().map(Node::MdxjsEsm));
        Ok(())
    }
}

/// Apply the frontmatter transform to `root` with the given options.
pub fn transform_frontmatter(root: &mut Root, options: MdxFrontmatterOptions) -> Result<()> {
    MdxFrontmatter::new(options).transform(root)
}
