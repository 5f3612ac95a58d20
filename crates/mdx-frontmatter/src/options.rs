/*
 * options.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Options for the frontmatter transform.
//!
//! The data part of the options (`name`, `importSpecifiers`) can be read
//! from a YAML or JSON configuration document:
//!
//! ```yaml
//! name: frontmatter
//! importSpecifiers:
//!   - key: layout
//! ```
//!
//! Parsers are functions, so they are attached in code with
//! [`MdxFrontmatterOptions::with_parser`].

use crate::error::{FrontmatterError, Result};
use crate::identifier::is_identifier_name;
use crate::parsers::{FrontmatterParser, ParserRegistry};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MdxFrontmatterOptions {
    /// If set, all data of a block is exported under this single name.
    /// Otherwise each top-level key becomes its own export.
    #[serde(default)]
    pub name: Option<String>,

    /// Parsers layered over the built-in `yaml` and `toml` parsers.
    #[serde(skip)]
    pub parsers: ParserRegistry,

    /// Keys whose values are module paths to re-export as default imports
    /// instead of literal data.
    #[serde(default)]
    pub import_specifiers: Vec<ImportSpecifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImportSpecifier {
    /// The frontmatter key to match.
    pub key: String,
}

impl ImportSpecifier {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl MdxFrontmatterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read options from a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Read options from a JSON document.
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_parser(
        mut self,
        tag: impl Into<String>,
        parser: impl FrontmatterParser + 'static,
    ) -> Self {
        self.parsers.insert(tag, parser);
        self
    }

    pub fn with_import_specifier(mut self, key: impl Into<String>) -> Self {
        self.import_specifiers.push(ImportSpecifier::new(key));
        self
    }

    /// The configured export name. An empty name counts as unset.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Check that `name`, if given, is a valid identifier name.
    pub fn validate(&self) -> Result<()> {
        match self.name() {
            Some(name) if !is_identifier_name(name) => {
                Err(FrontmatterError::InvalidName(name.to_string()))
            }
            _ => Ok(()),
        }
    }
}
