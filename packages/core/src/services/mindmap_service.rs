//! Mind Map Service - Generate-or-Fetch Orchestration
//!
//! This module wires the pure layout generator to the persistence
//! boundary. The generator itself has no awareness of storage; this
//! service decides when to reuse a stored graph and when to recompute.

use crate::db::SummaryStore;
use crate::layout::generate_mind_map;
use crate::models::MindMap;
use crate::services::error::ServiceError;
use std::sync::Arc;

/// Business service for computed mind maps
pub struct MindMapService {
    store: Arc<dyn SummaryStore>,
}

impl MindMapService {
    /// Create a new MindMapService over a store
    pub fn new(store: Arc<dyn SummaryStore>) -> Self {
        Self { store }
    }

    /// Return the stored mind map for a summary, generating it on first
    /// request
    ///
    /// A graph persisted by an earlier call is returned verbatim; the
    /// generator only runs when no graph exists yet for this summary.
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` when the summary id does not exist.
    pub async fn get_or_generate(&self, summary_id: &str) -> Result<MindMap, ServiceError> {
        if let Some(existing) = self.store.get_mind_map(summary_id).await? {
            tracing::debug!("Serving stored mind map for summary {}", summary_id);
            return Ok(existing);
        }

        self.regenerate(summary_id).await
    }

    /// Recompute the mind map for a summary and replace the stored graph
    ///
    /// Runs the layout generator on the summary's current text and topics
    /// and upserts the result. Safe to call any number of times; identical
    /// inputs produce identical graphs.
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` when the summary id does not exist.
    pub async fn regenerate(&self, summary_id: &str) -> Result<MindMap, ServiceError> {
        let summary = self
            .store
            .get_summary(summary_id)
            .await?
            .ok_or_else(|| ServiceError::record_not_found(summary_id))?;

        let graph = generate_mind_map(&summary.summary_text, &summary.topics);
        tracing::info!(
            "Generated mind map for summary {}: {} nodes, {} edges",
            summary_id,
            graph.nodes.len(),
            graph.edges.len()
        );

        Ok(self.store.upsert_mind_map(summary_id, &graph).await?)
    }
}
