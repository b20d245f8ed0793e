//! Mind Map Data Structures
//!
//! This module defines the node/edge graph produced by the radial layout
//! generator, plus the persisted `MindMap` record that stores a computed
//! graph keyed by its originating summary.
//!
//! # Graph Shape
//!
//! A mind map is a two-level tree: one root node, one ring of heading nodes
//! connected to the root, and one outer ring of topic nodes connected to
//! headings (or directly to the root when the summary has no headings).
//! Nodes carry their final canvas coordinates; the rendering layer never
//! needs to run a layout pass of its own.
//!
//! # Examples
//!
//! ```rust
//! use tubemind_core::models::{MindMapEdge, MindMapNode, NodeKind, Position};
//!
//! let root = MindMapNode::root("Summary", Position { x: 400.0, y: 50.0 });
//! let heading = MindMapNode::heading(0, "Intro", 2, Position { x: 700.0, y: 300.0 });
//! let edge = MindMapEdge::plain(MindMapNode::ROOT_ID, &heading.id);
//!
//! assert_eq!(root.kind, NodeKind::Root);
//! assert_eq!(heading.id, "heading-0");
//! assert_eq!(edge.id, "edge-root-heading-0");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Visual/behavioral category of a mind map node (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// The single hub node every graph contains
    Root,
    /// A markdown section heading (level 2 or 3)
    Heading,
    /// An externally supplied keyword/tag
    Topic,
}

/// Rendering style hint for an edge (no semantic weight)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStyle {
    /// Straight routing, used for root-to-heading edges
    Plain,
    /// Curved routing, used for edges ending at topic nodes
    Curved,
}

/// A 2D coordinate in abstract canvas units
///
/// Computed once at graph construction time and never mutated by this
/// crate. A downstream rendering layer may let users drag nodes, but that
/// happens on its own copy of the data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A graph vertex to be rendered
///
/// Node ids are deterministic: the root is always `"root"`, heading nodes
/// are `"heading-<index>"` in extraction order, topic nodes are
/// `"topic-<index>"` in input order. Ids are unique within one graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindMapNode {
    /// Unique id within one graph instance
    pub id: String,

    /// Node category (root, heading, topic)
    pub kind: NodeKind,

    /// Display string
    pub label: String,

    /// Markdown heading depth (2 or 3); present only on heading nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,

    /// Final canvas coordinate
    pub position: Position,
}

impl MindMapNode {
    /// Fixed id of the root node
    pub const ROOT_ID: &'static str = "root";

    /// Id for the heading node at `index` (zero-based extraction order)
    pub fn heading_id(index: usize) -> String {
        format!("heading-{}", index)
    }

    /// Id for the topic node at `index` (zero-based input order)
    pub fn topic_id(index: usize) -> String {
        format!("topic-{}", index)
    }

    /// Create the root node
    pub fn root(label: impl Into<String>, position: Position) -> Self {
        Self {
            id: Self::ROOT_ID.to_string(),
            kind: NodeKind::Root,
            label: label.into(),
            level: None,
            position,
        }
    }

    /// Create a heading node at `index` with its markdown depth
    pub fn heading(index: usize, label: impl Into<String>, level: u8, position: Position) -> Self {
        Self {
            id: Self::heading_id(index),
            kind: NodeKind::Heading,
            label: label.into(),
            level: Some(level),
            position,
        }
    }

    /// Create a topic node at `index`
    pub fn topic(index: usize, label: impl Into<String>, position: Position) -> Self {
        Self {
            id: Self::topic_id(index),
            kind: NodeKind::Topic,
            label: label.into(),
            level: None,
            position,
        }
    }
}

/// A directed connection between two nodes
///
/// Edge ids are derived from the endpoint ids as
/// `"edge-<sourceId>-<targetId>"`, so they are unique whenever the
/// (source, target) pairs are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindMapEdge {
    /// Unique id within one graph instance
    pub id: String,

    /// Source node id (must exist in the same graph)
    pub source: String,

    /// Target node id (must exist in the same graph)
    pub target: String,

    /// Rendering style hint
    pub style: EdgeStyle,
}

impl MindMapEdge {
    fn new(source: impl Into<String>, target: impl Into<String>, style: EdgeStyle) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("edge-{}-{}", source, target),
            source,
            target,
            style,
        }
    }

    /// Create a plain-style edge (root-to-heading connections)
    pub fn plain(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(source, target, EdgeStyle::Plain)
    }

    /// Create a curved-style edge (connections ending at topic nodes)
    pub fn curved(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(source, target, EdgeStyle::Curved)
    }
}

/// A complete node/edge graph as produced by the layout generator
///
/// Node order is root first, then heading nodes in extraction order, then
/// topic nodes in input order. Edge order mirrors node emission order.
/// Construction is deterministic: identical inputs produce structurally
/// identical graphs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MindMapGraph {
    pub nodes: Vec<MindMapNode>,
    pub edges: Vec<MindMapEdge>,
}

/// Persisted mind map record, keyed by the originating summary
///
/// At most one record exists per summary; recomputing a graph replaces the
/// stored nodes and edges in place (upsert semantics).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindMap {
    /// Unique record identifier
    pub id: String,

    /// Id of the summary this graph was computed from
    pub summary_id: String,

    /// Graph vertices (root first)
    pub nodes: Vec<MindMapNode>,

    /// Graph connections
    pub edges: Vec<MindMapEdge>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last recomputation timestamp
    pub modified_at: DateTime<Utc>,
}

impl MindMap {
    /// Create a new record wrapping a computed graph
    pub fn new(summary_id: impl Into<String>, graph: MindMapGraph) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            summary_id: summary_id.into(),
            nodes: graph.nodes,
            edges: graph.edges,
            created_at: now,
            modified_at: now,
        }
    }

    /// Copy of the stored graph
    pub fn graph(&self) -> MindMapGraph {
        MindMapGraph {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }
}
