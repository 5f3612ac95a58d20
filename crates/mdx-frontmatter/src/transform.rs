/*
 * transform.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * The interface a host uses to run a transform over an mdast tree.
 */

//! The [`AstTransform`] trait.
//!
//! A host that builds its own processing chain holds transforms as
//! `Box<dyn AstTransform>` and runs them one after another:
//!
//! ```rust
//! use mdx_ast::{Node, Root};
//! use mdx_frontmatter::{AstTransform, MdxFrontmatter};
//!
//! let mut transforms: Vec<Box<dyn AstTransform>> = Vec::new();
//! transforms.push(Box::new(MdxFrontmatter::default()));
//!
//! let mut root = Root::new(vec![Node::yaml("title: Hello")]);
//! for transform in &transforms {
//!     transform.transform(&mut root).unwrap();
//! }
//! assert_eq!(root.children.len(), 2);
//! ```

use crate::Result;
use mdx_ast::mdast::Root;

/// Trait for mdast transformations.
///
/// # Thread Safety
///
/// Transforms must be `Send + Sync` so one configured transform can be
/// shared across threads processing independent documents.
pub trait AstTransform: Send + Sync {
    /// Human-readable name for this transform.
    ///
    /// Used for logging and debugging.
    fn name(&self) -> &str;

    /// Apply the transformation to the tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the transformation fails. The tree is left as it
    /// was in that case.
    fn transform(&self, root: &mut Root) -> Result<()>;
}
