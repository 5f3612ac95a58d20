//! Error types for mdx-frontmatter

use thiserror::Error;

/// Error type for everything a frontmatter transform can fail with.
///
/// Every variant is fatal: a transform that returns one of these has left
/// the document tree untouched.
#[derive(Error, Debug)]
pub enum FrontmatterError {
    #[error("If name is specified, this should be a valid identifier name, got: {0:?}")]
    InvalidName(String),

    #[error("Expected frontmatter data to be an object, got:\n{0}")]
    NotAnObject(String),

    #[error("Frontmatter keys should be valid identifiers, got: {0:?}")]
    InvalidKey(String),

    #[error("Import specifier {key:?} cannot be used as a module source, got: {found}")]
    InvalidImportSource { key: String, found: &'static str },

    /// A frontmatter parser failed. The parser's error is kept as-is and
    /// can be recovered with `downcast_ref`.
    #[error(transparent)]
    Parser(Box<dyn std::error::Error + Send + Sync>),

    #[error("Invalid frontmatter options: {0}")]
    OptionsYaml(#[from] serde_yaml::Error),

    #[error("Invalid frontmatter options: {0}")]
    OptionsJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FrontmatterError>;
