//! Summary Service - Record CRUD and Ingest
//!
//! This module provides the business logic for summary records: creating
//! them from already-complete text, ingesting them from a streamed
//! generator, and reading them back for display or mind map generation.
//!
//! # Ingest Model
//!
//! The text generator (an LLM behind an external boundary) produces a
//! lazy, finite, non-restartable sequence of text fragments. The service
//! concatenates fragments in arrival order and persists the result once
//! the stream ends; it never retries or restarts a stream.

use crate::db::SummaryStore;
use crate::models::{DeleteResult, NewSummary, Summary, ValidationError};
use crate::services::error::ServiceError;
use crate::utils::parse_video_id;
use std::sync::Arc;
use tokio_stream::{Stream, StreamExt};

/// Default number of records returned by [`SummaryService::list_summaries`]
pub const DEFAULT_LIST_LIMIT: usize = 12;

/// Business service for summary records
pub struct SummaryService {
    store: Arc<dyn SummaryStore>,
}

impl SummaryService {
    /// Create a new SummaryService over a store
    pub fn new(store: Arc<dyn SummaryStore>) -> Self {
        Self { store }
    }

    /// Create and persist a summary record
    ///
    /// When `video_id` is empty it is derived from `video_url`; a URL no
    /// id can be extracted from is a validation error. Null metadata is
    /// normalized to an empty JSON object.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` for an unrecognizable video URL or invalid
    ///   record fields
    /// - `StorageError` if the insert fails
    pub async fn create_summary(&self, mut new: NewSummary) -> Result<Summary, ServiceError> {
        if new.video_id.is_empty() {
            new.video_id = parse_video_id(&new.video_url)
                .ok_or_else(|| ValidationError::InvalidVideoUrl(new.video_url.clone()))?;
        }

        if new.metadata.is_null() {
            new.metadata = serde_json::json!({});
        }

        let summary = Summary::new(new);
        summary.validate()?;

        let stored = self.store.create_summary(summary).await?;
        tracing::debug!("Created summary {} for video {}", stored.id, stored.video_id);

        Ok(stored)
    }

    /// Ingest a summary from a streamed text generator
    ///
    /// Consumes the chunk stream to completion, concatenating fragments in
    /// arrival order into `summary_text`, then persists the record via
    /// [`Self::create_summary`]. Any `summary_text` already present on
    /// `new` is replaced.
    ///
    /// # Errors
    ///
    /// - `SourceUnavailable` if the stream yields an error mid-read
    /// - `GenerationFailed` if the stream ends without producing any text
    /// - plus everything [`Self::create_summary`] can return
    pub async fn ingest<S>(&self, mut new: NewSummary, mut chunks: S) -> Result<Summary, ServiceError>
    where
        S: Stream<Item = anyhow::Result<String>> + Unpin,
    {
        let mut text = String::new();

        while let Some(chunk) = chunks.next().await {
            let chunk = chunk.map_err(|e| ServiceError::source_unavailable(e.to_string()))?;
            text.push_str(&chunk);
        }

        if text.is_empty() {
            return Err(ServiceError::generation_failed(
                "generator stream produced no text",
            ));
        }

        new.summary_text = text;
        self.create_summary(new).await
    }

    /// Get a summary by id, with topics attached
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` when no record has that id.
    pub async fn get_summary(&self, id: &str) -> Result<Summary, ServiceError> {
        self.store
            .get_summary(id)
            .await?
            .ok_or_else(|| ServiceError::record_not_found(id))
    }

    /// List summaries, newest first
    pub async fn list_summaries(&self, limit: usize) -> Result<Vec<Summary>, ServiceError> {
        Ok(self.store.list_summaries(limit).await?)
    }

    /// List the most recent summaries with the default display limit
    pub async fn list_recent(&self) -> Result<Vec<Summary>, ServiceError> {
        self.list_summaries(DEFAULT_LIST_LIMIT).await
    }

    /// Delete a summary and its dependent rows (idempotent)
    pub async fn delete_summary(&self, id: &str) -> Result<DeleteResult, ServiceError> {
        let result = self.store.delete_summary(id).await?;
        if result.existed {
            tracing::debug!("Deleted summary {}", id);
        }
        Ok(result)
    }
}
