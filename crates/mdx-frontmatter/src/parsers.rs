/*
 * parsers.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Frontmatter parsers and the registry that maps block types to them.
 */

//! Frontmatter parsers.
//!
//! A parser turns the raw text of a frontmatter block into a
//! [`FrontmatterValue`]. Parsers are looked up by the mdast node type of the
//! block (`yaml`, `toml`, or anything a document parser emits).
//!
//! Any function or closure with the right shape is a parser:
//!
//! ```rust
//! use mdx_frontmatter::{FrontmatterValue, ParserRegistry};
//!
//! let registry = ParserRegistry::with_defaults().with_parser("json", |source: &str| {
//!     serde_json::from_str::<serde_json::Value>(source).map(|v| Some(FrontmatterValue::from(v)))
//! });
//! assert!(registry.contains("json"));
//! assert!(registry.contains("yaml"));
//! ```

use crate::value::{FrontmatterRecord, FrontmatterValue};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use yaml_rust2::{Yaml, YamlLoader};

/// Boxed error returned by parsers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Parses the raw text of a frontmatter block.
///
/// `Ok(None)` means the block holds no data and is skipped.
pub trait FrontmatterParser: Send + Sync {
    fn parse(&self, source: &str) -> Result<Option<FrontmatterValue>, BoxError>;
}

impl<F, E> FrontmatterParser for F
where
    F: Fn(&str) -> Result<Option<FrontmatterValue>, E> + Send + Sync,
    E: Into<BoxError>,
{
    fn parse(&self, source: &str) -> Result<Option<FrontmatterValue>, BoxError> {
        self(source).map_err(Into::into)
    }
}

/// Errors from the built-in YAML and TOML parsers.
#[derive(Error, Debug)]
pub enum DataParseError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] yaml_rust2::ScanError),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Frontmatter contains multiple YAML documents")]
    MultipleDocuments,

    #[error("Unsupported mapping key: {0}")]
    UnsupportedKey(String),

    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),
}

/// The built-in parsers, shared by every registry created with
/// [`ParserRegistry::with_defaults`].
pub static DEFAULT_PARSERS: Lazy<ParserRegistry> = Lazy::new(|| {
    ParserRegistry::new()
        .with_parser("yaml", parse_yaml)
        .with_parser("toml", parse_toml)
});

/// Mapping from block type tag to parser.
#[derive(Clone, Default)]
pub struct ParserRegistry {
    parsers: HashMap<String, Arc<dyn FrontmatterParser>>,
}

impl ParserRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// Create a registry holding the built-in `yaml` and `toml` parsers.
    pub fn with_defaults() -> Self {
        DEFAULT_PARSERS.clone()
    }

    /// Register a parser, replacing any parser already registered for `tag`.
    pub fn insert(&mut self, tag: impl Into<String>, parser: impl FrontmatterParser + 'static) {
        self.parsers.insert(tag.into(), Arc::new(parser));
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_parser(
        mut self,
        tag: impl Into<String>,
        parser: impl FrontmatterParser + 'static,
    ) -> Self {
        self.insert(tag, parser);
        self
    }

    /// Layer `overrides` on top of this registry. Entries in `overrides` win.
    pub fn merged_with(&self, overrides: &ParserRegistry) -> ParserRegistry {
        let mut parsers = self.parsers.clone();
        for (tag, parser) in &overrides.parsers {
            parsers.insert(tag.clone(), Arc::clone(parser));
        }
        ParserRegistry { parsers }
    }

    pub fn get(&self, tag: &str) -> Option<&dyn FrontmatterParser> {
        self.parsers.get(tag).map(|parser| parser.as_ref())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.parsers.contains_key(tag)
    }

    /// Registered tags, sorted.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.parsers.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("tags", &self.tags())
            .finish()
    }
}

// ============================================================================
// YAML
// ============================================================================

/// Parse YAML frontmatter.
///
/// Returns `None` for an empty block or a document whose root is `null`.
pub fn parse_yaml(source: &str) -> Result<Option<FrontmatterValue>, DataParseError> {
    let mut documents = YamlLoader::load_from_str(source)?;
    if documents.len() > 1 {
        return Err(DataParseError::MultipleDocuments);
    }
    match documents.pop() {
        None | Some(Yaml::Null) => Ok(None),
        Some(root) => yaml_to_value(root).map(Some),
    }
}

fn yaml_to_value(yaml: Yaml) -> Result<FrontmatterValue, DataParseError> {
    Ok(match yaml {
        Yaml::Null => FrontmatterValue::Null,
        Yaml::Boolean(b) => FrontmatterValue::Bool(b),
        Yaml::Integer(i) => FrontmatterValue::Integer(i),
        Yaml::Real(ref text) => match yaml.as_f64() {
            Some(f) => FrontmatterValue::Float(f),
            None => return Err(DataParseError::UnsupportedValue(text.clone())),
        },
        Yaml::String(s) => FrontmatterValue::String(s),
        Yaml::Array(items) => FrontmatterValue::Array(
            items
                .into_iter()
                .map(yaml_to_value)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Yaml::Hash(hash) => {
            let mut map = FrontmatterRecord::with_capacity(hash.len());
            for (key, value) in hash {
                map.insert(yaml_key(key)?, yaml_to_value(value)?);
            }
            FrontmatterValue::Object(map)
        }
        Yaml::Alias(_) => return Err(DataParseError::UnsupportedValue("alias".to_string())),
        Yaml::BadValue => return Err(DataParseError::UnsupportedValue("bad value".to_string())),
    })
}

/// Scalar keys become their string form, as they would as JavaScript
/// property names.
fn yaml_key(key: Yaml) -> Result<String, DataParseError> {
    match key {
        Yaml::String(s) | Yaml::Real(s) => Ok(s),
        Yaml::Integer(i) => Ok(i.to_string()),
        Yaml::Boolean(b) => Ok(b.to_string()),
        Yaml::Null => Ok("null".to_string()),
        other => Err(DataParseError::UnsupportedKey(format!("{:?}", other))),
    }
}

// ============================================================================
// TOML
// ============================================================================

/// Parse TOML frontmatter. A TOML document is always a table, so this
/// never returns `None`. Offset date-times become [`FrontmatterValue::Date`];
/// local dates and times become strings.
pub fn parse_toml(source: &str) -> Result<Option<FrontmatterValue>, DataParseError> {
    let table: toml::Table = toml::from_str(source)?;
    Ok(Some(toml_table_to_value(table)))
}

fn toml_table_to_value(table: toml::Table) -> FrontmatterValue {
    FrontmatterValue::Object(
        table
            .into_iter()
            .map(|(k, v)| (k, toml_to_value(v)))
            .collect(),
    )
}

fn toml_to_value(value: toml::Value) -> FrontmatterValue {
    match value {
        toml::Value::String(s) => FrontmatterValue::String(s),
        toml::Value::Integer(i) => FrontmatterValue::Integer(i),
        toml::Value::Float(f) => FrontmatterValue::Float(f),
        toml::Value::Boolean(b) => FrontmatterValue::Bool(b),
        toml::Value::Datetime(dt) => datetime_to_value(&dt),
        toml::Value::Array(items) => {
            FrontmatterValue::Array(items.into_iter().map(toml_to_value).collect())
        }
        toml::Value::Table(table) => toml_table_to_value(table),
    }
}

/// Only an offset date-time names a single instant; local dates and times
/// stay text.
fn datetime_to_value(dt: &toml::value::Datetime) -> FrontmatterValue {
    if dt.date.is_some() && dt.time.is_some() && dt.offset.is_some() {
        FrontmatterValue::Date(dt.to_string())
    } else {
        FrontmatterValue::String(dt.to_string())
    }
}
