//! SummaryStore Trait - Database Abstraction Layer
//!
//! This module defines the `SummaryStore` trait that abstracts persistence
//! for summaries, topics, and computed mind maps. The trait keeps the
//! service layer independent of the concrete backend.
//!
//! # Design Decisions
//!
//! 1. **Async-First**: All methods are async to support both embedded and
//!    network backends
//! 2. **Ownership Semantics**: Creation takes ownership of the record to
//!    avoid unnecessary cloning (caller can clone if needed)
//! 3. **Error Handling**: Uses `anyhow::Result` for flexible error context
//! 4. **Read semantics**: Missing records read as `Ok(None)`, not errors;
//!    the service layer decides what absence means
//!
//! # Examples
//!
//! ```rust,no_run
//! use tubemind_core::db::{DatabaseService, SummaryStore, TursoStore};
//! use tubemind_core::models::{NewSummary, Summary};
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let db = Arc::new(DatabaseService::new(PathBuf::from("./data/tubemind.db")).await?);
//!     let store: Arc<dyn SummaryStore> = Arc::new(TursoStore::new(db));
//!
//!     let summary = Summary::new(NewSummary {
//!         video_id: "dQw4w9WgXcQ".to_string(),
//!         video_url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
//!         title: "A Video".to_string(),
//!         summary_text: "## Overview".to_string(),
//!         metadata: json!({}),
//!         topics: vec!["music".to_string()],
//!         ..Default::default()
//!     });
//!     let created = store.create_summary(summary).await?;
//!
//!     Ok(())
//! }
//! ```

use crate::models::{DeleteResult, MindMap, MindMapGraph, Summary};
use anyhow::Result;
use async_trait::async_trait;

/// Abstraction layer for summary and mind map persistence
///
/// Implementations must be `Send + Sync` so futures holding them can move
/// between threads.
#[async_trait]
pub trait SummaryStore: Send + Sync {
    /// Persist a new summary together with its topic rows
    ///
    /// Takes ownership of the record. Returns the stored record as the
    /// database sees it (timestamps come from the database).
    ///
    /// # Errors
    ///
    /// Returns an error if the summary id already exists or the insert
    /// fails.
    async fn create_summary(&self, summary: Summary) -> Result<Summary>;

    /// Get a summary by id, with its topic rows attached in insertion
    /// order
    ///
    /// Returns `Ok(None)` when the record does not exist.
    async fn get_summary(&self, id: &str) -> Result<Option<Summary>>;

    /// List summaries, newest first
    ///
    /// Each returned record has its topic rows attached.
    async fn list_summaries(&self, limit: usize) -> Result<Vec<Summary>>;

    /// Delete a summary and everything hanging off it (topics, mind map)
    ///
    /// Idempotent: deleting a missing record succeeds with
    /// `existed = false`.
    async fn delete_summary(&self, id: &str) -> Result<DeleteResult>;

    /// Insert or replace the computed mind map for a summary
    ///
    /// At most one mind map exists per summary. A second upsert for the
    /// same summary replaces the stored nodes and edges, keeping the
    /// original record id and creation timestamp.
    async fn upsert_mind_map(&self, summary_id: &str, graph: &MindMapGraph) -> Result<MindMap>;

    /// Get the stored mind map for a summary
    ///
    /// Returns `Ok(None)` when no graph has been persisted yet.
    async fn get_mind_map(&self, summary_id: &str) -> Result<Option<MindMap>>;
}
