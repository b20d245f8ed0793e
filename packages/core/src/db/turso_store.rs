//! TursoStore - SummaryStore Implementation for libsql
//!
//! This module implements the `SummaryStore` trait on top of
//! `DatabaseService`, handling SQL execution and libsql::Row to model
//! conversion. Records are written without explicit timestamps (the
//! database stamps them) and re-read after mutation so callers always see
//! the canonical stored form.

use crate::db::database::DatabaseService;
use crate::db::summary_store::SummaryStore;
use crate::models::{DeleteResult, MindMap, MindMapGraph, Summary, Topic};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use libsql::Row;
use std::sync::Arc;
use uuid::Uuid;

/// SummaryStore backed by libsql
pub struct TursoStore {
    /// Underlying database service (connection + schema management)
    db: Arc<DatabaseService>,
}

impl TursoStore {
    /// Create a new TursoStore wrapper
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use tubemind_core::db::{DatabaseService, TursoStore};
    /// # use std::path::PathBuf;
    /// # use std::sync::Arc;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let db = Arc::new(DatabaseService::new(PathBuf::from("./tubemind.db")).await?);
    /// let store = TursoStore::new(db);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(db: Arc<DatabaseService>) -> Self {
        Self { db }
    }

    /// Parse timestamp from database - handles both SQLite and RFC3339
    /// formats
    ///
    /// SQLite CURRENT_TIMESTAMP returns: "YYYY-MM-DD HH:MM:SS"
    fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
            return Ok(naive.and_utc());
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.with_timezone(&Utc));
        }

        Err(anyhow::anyhow!(
            "Unable to parse timestamp '{}' as SQLite or RFC3339 format",
            s
        ))
    }

    /// Convert a summaries row to the Summary model (topics not attached)
    ///
    /// Expected columns (in order): id, video_id, video_url, title,
    /// channel_name, thumbnail_url, duration_seconds, summary_text,
    /// metadata, created_at, modified_at
    fn row_to_summary(row: &Row) -> Result<Summary> {
        let id: String = row.get(0).context("Failed to get id")?;
        let video_id: String = row.get(1).context("Failed to get video_id")?;
        let video_url: String = row.get(2).context("Failed to get video_url")?;
        let title: String = row.get(3).context("Failed to get title")?;
        let channel_name: Option<String> = row.get(4).context("Failed to get channel_name")?;
        let thumbnail_url: Option<String> = row.get(5).context("Failed to get thumbnail_url")?;
        let duration_seconds: Option<i64> =
            row.get(6).context("Failed to get duration_seconds")?;
        let summary_text: String = row.get(7).context("Failed to get summary_text")?;
        let metadata_json: String = row.get(8).context("Failed to get metadata")?;
        let created_at_str: String = row.get(9).context("Failed to get created_at")?;
        let modified_at_str: String = row.get(10).context("Failed to get modified_at")?;

        Ok(Summary {
            id,
            video_id,
            video_url,
            title,
            channel_name,
            thumbnail_url,
            duration_seconds,
            summary_text,
            metadata: serde_json::from_str(&metadata_json)
                .context("Failed to parse metadata JSON")?,
            created_at: Self::parse_timestamp(&created_at_str)?,
            modified_at: Self::parse_timestamp(&modified_at_str)?,
            topics: Vec::new(),
        })
    }

    /// Convert a topics row to the Topic model
    ///
    /// Expected columns (in order): id, summary_id, topic, created_at
    fn row_to_topic(row: &Row) -> Result<Topic> {
        let id: String = row.get(0).context("Failed to get topic id")?;
        let summary_id: String = row.get(1).context("Failed to get summary_id")?;
        let topic: String = row.get(2).context("Failed to get topic")?;
        let created_at_str: String = row.get(3).context("Failed to get created_at")?;

        Ok(Topic {
            id,
            summary_id,
            topic,
            created_at: Self::parse_timestamp(&created_at_str)?,
        })
    }

    /// Convert a mind_maps row to the MindMap model
    ///
    /// Expected columns (in order): id, summary_id, nodes, edges,
    /// created_at, modified_at
    fn row_to_mind_map(row: &Row) -> Result<MindMap> {
        let id: String = row.get(0).context("Failed to get mind map id")?;
        let summary_id: String = row.get(1).context("Failed to get summary_id")?;
        let nodes_json: String = row.get(2).context("Failed to get nodes")?;
        let edges_json: String = row.get(3).context("Failed to get edges")?;
        let created_at_str: String = row.get(4).context("Failed to get created_at")?;
        let modified_at_str: String = row.get(5).context("Failed to get modified_at")?;

        Ok(MindMap {
            id,
            summary_id,
            nodes: serde_json::from_str(&nodes_json).context("Failed to parse nodes JSON")?,
            edges: serde_json::from_str(&edges_json).context("Failed to parse edges JSON")?,
            created_at: Self::parse_timestamp(&created_at_str)?,
            modified_at: Self::parse_timestamp(&modified_at_str)?,
        })
    }

    /// Fetch topic rows for a summary, in insertion order
    async fn topics_for(&self, summary_id: &str) -> Result<Vec<Topic>> {
        let conn = self.db.connect_with_timeout().await?;

        let mut stmt = conn
            .prepare(
                "SELECT id, summary_id, topic, created_at
                 FROM topics WHERE summary_id = ? ORDER BY rowid",
            )
            .await
            .context("Failed to prepare topics query")?;

        let mut rows = stmt
            .query([summary_id])
            .await
            .context("Failed to execute topics query")?;

        let mut topics = Vec::new();
        while let Some(row) = rows.next().await.context("Failed to read topics row")? {
            topics.push(Self::row_to_topic(&row)?);
        }

        Ok(topics)
    }
}

#[async_trait]
impl SummaryStore for TursoStore {
    async fn create_summary(&self, summary: Summary) -> Result<Summary> {
        summary.validate().context("Summary validation failed")?;

        let conn = self.db.connect_with_timeout().await?;

        conn.execute(
            "INSERT INTO summaries (id, video_id, video_url, title, channel_name, thumbnail_url, duration_seconds, summary_text, metadata)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            (
                summary.id.as_str(),
                summary.video_id.as_str(),
                summary.video_url.as_str(),
                summary.title.as_str(),
                summary.channel_name.as_deref(),
                summary.thumbnail_url.as_deref(),
                summary.duration_seconds,
                summary.summary_text.as_str(),
                summary.metadata.to_string(),
            ),
        )
        .await
        .context("Failed to insert summary")?;

        for topic in &summary.topics {
            conn.execute(
                "INSERT INTO topics (id, summary_id, topic) VALUES (?, ?, ?)",
                (
                    topic.id.as_str(),
                    topic.summary_id.as_str(),
                    topic.topic.as_str(),
                ),
            )
            .await
            .context("Failed to insert topic")?;
        }

        // Re-read so the caller sees the database-stamped record
        self.get_summary(&summary.id)
            .await?
            .context("Summary disappeared after insert")
    }

    async fn get_summary(&self, id: &str) -> Result<Option<Summary>> {
        let conn = self.db.connect_with_timeout().await?;

        let mut stmt = conn
            .prepare(
                "SELECT id, video_id, video_url, title, channel_name, thumbnail_url,
                        duration_seconds, summary_text, metadata, created_at, modified_at
                 FROM summaries WHERE id = ?",
            )
            .await
            .context("Failed to prepare get_summary query")?;

        let mut rows = stmt
            .query([id])
            .await
            .context("Failed to execute get_summary query")?;

        match rows.next().await.context("Failed to read summary row")? {
            Some(row) => {
                let mut summary = Self::row_to_summary(&row)?;
                summary.topics = self.topics_for(id).await?;
                Ok(Some(summary))
            }
            None => Ok(None),
        }
    }

    async fn list_summaries(&self, limit: usize) -> Result<Vec<Summary>> {
        let conn = self.db.connect_with_timeout().await?;

        let mut stmt = conn
            .prepare(
                "SELECT id, video_id, video_url, title, channel_name, thumbnail_url,
                        duration_seconds, summary_text, metadata, created_at, modified_at
                 FROM summaries ORDER BY created_at DESC, rowid DESC LIMIT ?",
            )
            .await
            .context("Failed to prepare list_summaries query")?;

        let mut rows = stmt
            .query([limit as i64])
            .await
            .context("Failed to execute list_summaries query")?;

        let mut summaries = Vec::new();
        while let Some(row) = rows.next().await.context("Failed to read summary row")? {
            summaries.push(Self::row_to_summary(&row)?);
        }

        for summary in &mut summaries {
            summary.topics = self.topics_for(&summary.id).await?;
        }

        Ok(summaries)
    }

    async fn delete_summary(&self, id: &str) -> Result<DeleteResult> {
        let conn = self.db.connect_with_timeout().await?;

        // Foreign keys are declared with ON DELETE CASCADE, but the
        // enforcement pragma is per-connection; delete child rows
        // explicitly so the result never depends on connection state.
        conn.execute("DELETE FROM mind_maps WHERE summary_id = ?", [id])
            .await
            .context("Failed to delete mind map rows")?;

        conn.execute("DELETE FROM topics WHERE summary_id = ?", [id])
            .await
            .context("Failed to delete topic rows")?;

        let affected = conn
            .execute("DELETE FROM summaries WHERE id = ?", [id])
            .await
            .context("Failed to delete summary")?;

        if affected > 0 {
            Ok(DeleteResult::existed())
        } else {
            Ok(DeleteResult::not_found())
        }
    }

    async fn upsert_mind_map(&self, summary_id: &str, graph: &MindMapGraph) -> Result<MindMap> {
        let nodes_json =
            serde_json::to_string(&graph.nodes).context("Failed to serialize nodes")?;
        let edges_json =
            serde_json::to_string(&graph.edges).context("Failed to serialize edges")?;

        let conn = self.db.connect_with_timeout().await?;

        // The generated id only takes effect on first insert; replacing an
        // existing graph keeps the original record id and created_at.
        conn.execute(
            "INSERT INTO mind_maps (id, summary_id, nodes, edges)
             VALUES (?, ?, ?, ?)
             ON CONFLICT(summary_id) DO UPDATE SET
                 nodes = excluded.nodes,
                 edges = excluded.edges,
                 modified_at = CURRENT_TIMESTAMP",
            (
                Uuid::new_v4().to_string(),
                summary_id,
                nodes_json.as_str(),
                edges_json.as_str(),
            ),
        )
        .await
        .context("Failed to upsert mind map")?;

        self.get_mind_map(summary_id)
            .await?
            .context("Mind map disappeared after upsert")
    }

    async fn get_mind_map(&self, summary_id: &str) -> Result<Option<MindMap>> {
        let conn = self.db.connect_with_timeout().await?;

        let mut stmt = conn
            .prepare(
                "SELECT id, summary_id, nodes, edges, created_at, modified_at
                 FROM mind_maps WHERE summary_id = ?",
            )
            .await
            .context("Failed to prepare get_mind_map query")?;

        let mut rows = stmt
            .query([summary_id])
            .await
            .context("Failed to execute get_mind_map query")?;

        match rows.next().await.context("Failed to read mind map row")? {
            Some(row) => Ok(Some(Self::row_to_mind_map(&row)?)),
            None => Ok(None),
        }
    }
}
