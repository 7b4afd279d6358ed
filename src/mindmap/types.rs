//! Mind map graph types
//!
//! Serialized in the shape React Flow consumes: nodes carry `data.label`,
//! styles are camelCase CSS properties.

use serde::{Deserialize, Serialize};

/// Identifier of the root node
pub const ROOT_ID: &str = "0";

/// Label of the root node
pub const ROOT_LABEL: &str = "Document Overview";

/// 2D position in diagram units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Node payload rendered by the diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub label: String,
}

/// Cosmetic node styling
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<String>,
}

impl NodeStyle {
    /// Blue filled box for the document root
    pub fn root() -> Self {
        Self {
            background: Some("#3b82f6".into()),
            color: Some("white".into()),
            border: Some("1px solid #2563eb".into()),
            border_radius: Some("8px".into()),
            padding: Some("10px 20px".into()),
            ..Default::default()
        }
    }

    /// Light box for a key phrase
    pub fn phrase() -> Self {
        Self {
            background: Some("#f8fafc".into()),
            border: Some("1px solid #e2e8f0".into()),
            border_radius: Some("6px".into()),
            padding: Some("8px 16px".into()),
            font_size: Some("14px".into()),
            width: Some("auto".into()),
            max_width: Some("250px".into()),
            ..Default::default()
        }
    }
}

/// A mind map node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    #[serde(rename = "type", default = "default_node_type")]
    pub node_type: String,
    pub position: Position,
    pub data: NodeData,
    #[serde(default)]
    pub style: NodeStyle,
}

fn default_node_type() -> String {
    "default".to_string()
}

impl Node {
    pub fn new(id: impl Into<String>, position: Position, label: impl Into<String>, style: NodeStyle) -> Self {
        Self {
            id: id.into(),
            node_type: default_node_type(),
            position,
            data: NodeData {
                label: label.into(),
            },
            style,
        }
    }

    pub fn label(&self) -> &str {
        &self.data.label
    }
}

/// Cosmetic edge styling
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
}

/// A directed mind map edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type", default = "default_edge_type")]
    pub edge_type: String,
    #[serde(default)]
    pub style: EdgeStyle,
    #[serde(default)]
    pub animated: bool,
}

fn default_edge_type() -> String {
    "smoothstep".to_string()
}

impl Edge {
    /// Edge `e<source>-<target>` with the default connector styling
    pub fn between(source: &str, target: &str) -> Self {
        Self::with_id(format!("e{}-{}", source, target), source, target)
    }

    pub fn with_id(id: String, source: &str, target: &str) -> Self {
        Self {
            id,
            source: source.to_string(),
            target: target.to_string(),
            edge_type: default_edge_type(),
            style: EdgeStyle {
                stroke: Some("#94a3b8".into()),
            },
            animated: false,
        }
    }
}

/// A node/edge graph
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MindMap {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl MindMap {
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn root(&self) -> Option<&Node> {
        self.node(ROOT_ID)
    }
}
