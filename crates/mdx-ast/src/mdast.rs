/*
 * mdast.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The Markdown document tree.
//!
//! Only the node shapes a top-level transform needs to tell apart are typed
//! here: literal nodes (`{ type, value }`, e.g. `yaml`, `toml`, `code`),
//! parent nodes (`{ type, children }`), void nodes (neither, e.g.
//! `thematicBreak`), and generated `mdxjsEsm` nodes that carry a JavaScript
//! program. Node types stay strings so that frontmatter parsers can be
//! registered for any block type a document parser emits.
//!
//! Every other field of a node (`depth`, `lang`, `url`, ...) is kept in
//! `extra`, so a tree loaded from JSON serializes back to the same JSON.
//! Incoming `mdxjsEsm` nodes load as literal nodes with their `data` kept
//! as raw JSON.

use crate::estree::Program;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A point in the source document (1-indexed line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub line: usize,
    pub column: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

/// The source range a node was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub start: Point,
    pub end: Point,
}

/// The document root.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename = "root")]
pub struct Root {
    pub children: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Root {
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            children,
            data: None,
            position: None,
        }
    }
}

/// A node of the tree.
///
/// Loading tries the shapes in order: a `value` makes a literal node,
/// `children` a parent node, anything else a void node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Literal(LiteralNode),
    Parent(ParentNode),
    #[serde(skip_deserializing)]
    MdxjsEsm(MdxjsEsm),
    Void(VoidNode),
}

/// A node whose content is a single string, such as `yaml` or `toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralNode {
    #[serde(rename = "type")]
    pub node_type: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentNode {
    #[serde(rename = "type")]
    pub node_type: String,
    pub children: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoidNode {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An ESM block (`import`/`export` statements) in an MDX document.
///
/// Generated nodes have an empty `value`; the program lives in
/// `data.estree`, which is what MDX compiles.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "mdxjsEsm")]
pub struct MdxjsEsm {
    pub value: String,
    pub data: EsmData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EsmData {
    pub estree: Option<Program>,
}

impl MdxjsEsm {
    /// Wrap a program in an ESM node with no source text.
    pub fn from_program(program: Program) -> Self {
        Self {
            value: String::new(),
            data: EsmData {
                estree: Some(program),
            },
            position: None,
        }
    }

    pub fn program(&self) -> Option<&Program> {
        self.data.estree.as_ref()
    }
}

impl Node {
    /// Create a literal node of the given type.
    pub fn literal(node_type: impl Into<String>, value: impl Into<String>) -> Self {
        Node::Literal(LiteralNode {
            node_type: node_type.into(),
            value: value.into(),
            data: None,
            position: None,
            extra: Map::new(),
        })
    }

    /// Create a `yaml` frontmatter node.
    pub fn yaml(value: impl Into<String>) -> Self {
        Self::literal("yaml", value)
    }

    /// Create a `toml` frontmatter node.
    pub fn toml(value: impl Into<String>) -> Self {
        Self::literal("toml", value)
    }

    pub fn parent(node_type: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Parent(ParentNode {
            node_type: node_type.into(),
            children,
            data: None,
            position: None,
            extra: Map::new(),
        })
    }

    pub fn void(node_type: impl Into<String>) -> Self {
        Node::Void(VoidNode {
            node_type: node_type.into(),
            data: None,
            position: None,
            extra: Map::new(),
        })
    }

    /// The mdast `type` discriminator of this node.
    pub fn node_type(&self) -> &str {
        match self {
            Node::Literal(node) => &node.node_type,
            Node::Parent(node) => &node.node_type,
            Node::MdxjsEsm(_) => "mdxjsEsm",
            Node::Void(node) => &node.node_type,
        }
    }

    /// The string content of a literal node.
    pub fn literal_value(&self) -> Option<&str> {
        match self {
            Node::Literal(node) => Some(&node.value),
            _ => None,
        }
    }

    pub fn position(&self) -> Option<&Position> {
        match self {
            Node::Literal(node) => node.position.as_ref(),
            Node::Parent(node) => node.position.as_ref(),
            Node::MdxjsEsm(node) => node.position.as_ref(),
            Node::Void(node) => node.position.as_ref(),
        }
    }

    pub fn as_mdxjs_esm(&self) -> Option<&MdxjsEsm> {
        match self {
            Node::MdxjsEsm(node) => Some(node),
            _ => None,
        }
    }
}

impl From<MdxjsEsm> for Node {
    fn from(node: MdxjsEsm) -> Self {
        Node::MdxjsEsm(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estree::SourceType;
    use serde_json::json;

    #[test]
    fn test_node_type() {
        assert_eq!(Node::yaml("a: 1").node_type(), "yaml");
        assert_eq!(Node::toml("a = 1").node_type(), "toml");
        assert_eq!(Node::parent("paragraph", vec![]).node_type(), "paragraph");
        let esm = MdxjsEsm::from_program(Program::new(SourceType::Module, vec![]));
        assert_eq!(Node::from(esm).node_type(), "mdxjsEsm");
    }

    #[test]
    fn test_literal_value_only_for_literals() {
        assert_eq!(Node::yaml("title: Hi").literal_value(), Some("title: Hi"));
        assert_eq!(Node::parent("paragraph", vec![]).literal_value(), None);
    }

    #[test]
    fn test_root_serializes_as_mdast() {
        let root = Root::new(vec![
            Node::yaml("a: 1"),
            Node::parent("paragraph", vec![Node::literal("text", "Hello")]),
        ]);
        let value = serde_json::to_value(&root).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "root",
                "children": [
                    { "type": "yaml", "value": "a: 1" },
                    {
                        "type": "paragraph",
                        "children": [{ "type": "text", "value": "Hello" }]
                    }
                ]
            })
        );
    }

    #[test]
    fn test_position_serialization() {
        let Node::Literal(mut node) = Node::yaml("") else {
            panic!("expected a literal node");
        };
        node.position = Some(Position {
            start: Point {
                line: 1,
                column: 1,
                offset: Some(0),
            },
            end: Point {
                line: 2,
                column: 4,
                offset: None,
            },
        });
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value["position"],
            json!({
                "start": { "line": 1, "column": 1, "offset": 0 },
                "end": { "line": 2, "column": 4 }
            })
        );
    }

    #[test]
    fn test_esm_serializes_with_estree_data() {
        let esm = MdxjsEsm::from_program(Program::new(SourceType::Module, vec![]));
        let value = serde_json::to_value(&esm).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "mdxjsEsm",
                "value": "",
                "data": {
                    "estree": { "type": "Program", "sourceType": "module", "body": [] }
                }
            })
        );
    }

    #[test]
    fn test_load_keeps_every_field() {
        let source = json!({
            "type": "root",
            "children": [
                { "type": "yaml", "value": "a: 1", "position": {
                    "start": { "line": 1, "column": 1, "offset": 0 },
                    "end": { "line": 3, "column": 4, "offset": 11 }
                } },
                {
                    "type": "heading",
                    "depth": 2,
                    "children": [{ "type": "text", "value": "Title" }],
                    "data": { "hProperties": { "id": "title" } }
                },
                { "type": "code", "lang": "js", "meta": null, "value": "let a;" },
                { "type": "thematicBreak" },
                { "type": "image", "url": "a.png", "alt": "A", "title": null }
            ]
        });

        let root: Root = serde_json::from_value(source.clone()).unwrap();

        assert_eq!(root.children[0].literal_value(), Some("a: 1"));
        assert_eq!(root.children[0].position().map(|p| p.end.line), Some(3));
        let Node::Parent(heading) = &root.children[1] else {
            panic!("expected a parent node");
        };
        assert_eq!(heading.extra["depth"], json!(2));
        assert!(heading.data.is_some());
        let Node::Literal(code) = &root.children[2] else {
            panic!("expected a literal node");
        };
        assert_eq!(code.extra["lang"], json!("js"));
        assert_eq!(root.children[3].node_type(), "thematicBreak");
        assert!(matches!(root.children[4], Node::Void(_)));

        assert_eq!(serde_json::to_value(&root).unwrap(), source);
    }

    #[test]
    fn test_incoming_esm_loads_as_literal() {
        let source = json!({
            "type": "mdxjsEsm",
            "value": "export const a = 1",
            "data": { "estree": { "type": "Program", "body": [], "sourceType": "module" } }
        });
        let node: Node = serde_json::from_value(source.clone()).unwrap();
        assert_eq!(node.literal_value(), Some("export const a = 1"));
        assert!(node.as_mdxjs_esm().is_none());
        assert_eq!(serde_json::to_value(&node).unwrap(), source);
    }
}
