//! Data Models
//!
//! This module defines the record and graph structures used across the
//! crate:
//!
//! - [`summary`] - Summary and Topic records, validation, delete results
//! - [`mindmap`] - Mind map nodes, edges, graphs, and the persisted record

pub mod mindmap;
pub mod summary;

pub use mindmap::{EdgeStyle, MindMap, MindMapEdge, MindMapGraph, MindMapNode, NodeKind, Position};
pub use summary::{DeleteResult, NewSummary, Summary, Topic, ValidationError};
