//! Summary and Topic Data Structures
//!
//! This module defines the persisted records produced by the summarization
//! pipeline: a `Summary` (the structured markdown text for one video plus
//! its metadata) and its associated `Topic` keyword rows.
//!
//! # Examples
//!
//! ```rust
//! use tubemind_core::models::{NewSummary, Summary};
//! use serde_json::json;
//!
//! let summary = Summary::new(NewSummary {
//!     video_id: "dQw4w9WgXcQ".to_string(),
//!     video_url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
//!     title: "A Video".to_string(),
//!     summary_text: "## Overview\n\nText".to_string(),
//!     metadata: json!({}),
//!     topics: vec!["music".to_string()],
//!     ..Default::default()
//! });
//!
//! assert!(summary.validate().is_ok());
//! assert_eq!(summary.topics.len(), 1);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Validation errors for record construction
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Not a recognizable YouTube URL: {0}")]
    InvalidVideoUrl(String),

    #[error("Metadata validation failed: {0}")]
    InvalidMetadata(String),
}

/// A keyword/tag row associated with one summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// Unique row identifier
    pub id: String,

    /// Owning summary id
    pub summary_id: String,

    /// The keyword itself, stored verbatim
    pub topic: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Topic {
    /// Create a new topic row for a summary
    pub fn new(summary_id: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            summary_id: summary_id.into(),
            topic: topic.into(),
            created_at: Utc::now(),
        }
    }
}

/// Parameters for creating a summary (avoids too-many-arguments lint)
#[derive(Debug, Clone, Default)]
pub struct NewSummary {
    /// 11-character YouTube video id; when empty the service derives it
    /// from `video_url`
    pub video_id: String,

    /// Original video URL as submitted
    pub video_url: String,

    /// Video title
    pub title: String,

    /// Channel name, when known
    pub channel_name: Option<String>,

    /// Thumbnail URL, when known
    pub thumbnail_url: Option<String>,

    /// Video duration in seconds, when known
    pub duration_seconds: Option<i64>,

    /// Structured markdown summary text
    pub summary_text: String,

    /// Free-form generation metadata (model name, generated-at, ...)
    pub metadata: serde_json::Value,

    /// Topic keywords to attach, in order
    pub topics: Vec<String>,
}

/// A persisted video summary record with its topic rows attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Unique record identifier
    pub id: String,

    /// 11-character YouTube video id
    pub video_id: String,

    /// Original video URL
    pub video_url: String,

    /// Video title
    pub title: String,

    /// Channel name, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_name: Option<String>,

    /// Thumbnail URL, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    /// Video duration in seconds, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i64>,

    /// Structured markdown summary text
    pub summary_text: String,

    /// Free-form generation metadata (JSON object)
    pub metadata: serde_json::Value,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub modified_at: DateTime<Utc>,

    /// Associated topic rows, in insertion order
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<Topic>,
}

impl Summary {
    /// Create a new Summary with an auto-generated UUID
    ///
    /// Topic strings are turned into `Topic` rows owned by the new record,
    /// preserving their order.
    pub fn new(new: NewSummary) -> Self {
        let now = Utc::now();
        let id = Uuid::new_v4().to_string();
        let topics = new
            .topics
            .into_iter()
            .map(|topic| Topic::new(id.clone(), topic))
            .collect();

        Self {
            id,
            video_id: new.video_id,
            video_url: new.video_url,
            title: new.title,
            channel_name: new.channel_name,
            thumbnail_url: new.thumbnail_url,
            duration_seconds: new.duration_seconds,
            summary_text: new.summary_text,
            metadata: new.metadata,
            created_at: now,
            modified_at: now,
            topics,
        }
    }

    /// Validate record structure and required fields
    ///
    /// Summary text is allowed to be empty here; the ingest path rejects
    /// empty generator output before a record is ever built.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if:
    /// - `id`, `video_id`, or `video_url` is empty
    /// - `metadata` is not a JSON object
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::MissingField("id".to_string()));
        }

        if self.video_id.is_empty() {
            return Err(ValidationError::MissingField("video_id".to_string()));
        }

        if self.video_url.is_empty() {
            return Err(ValidationError::MissingField("video_url".to_string()));
        }

        if !self.metadata.is_object() {
            return Err(ValidationError::InvalidMetadata(
                "metadata must be a JSON object".to_string(),
            ));
        }

        Ok(())
    }

    /// Update the summary text
    pub fn set_summary_text(&mut self, summary_text: String) {
        self.summary_text = summary_text;
        self.modified_at = Utc::now();
    }
}

/// Result of a delete operation
///
/// Deletes are idempotent: removing a record that does not exist succeeds,
/// and `existed` records whether anything was actually removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteResult {
    /// Whether the record existed before deletion
    pub existed: bool,
}

impl DeleteResult {
    /// Create a DeleteResult indicating the record existed
    pub fn existed() -> Self {
        Self { existed: true }
    }

    /// Create a DeleteResult indicating the record didn't exist
    pub fn not_found() -> Self {
        Self { existed: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_new() -> NewSummary {
        NewSummary {
            video_id: "dQw4w9WgXcQ".to_string(),
            video_url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
            title: "Test Video".to_string(),
            channel_name: Some("Test Channel".to_string()),
            thumbnail_url: None,
            duration_seconds: Some(300),
            summary_text: "## Overview\n\nSome text".to_string(),
            metadata: json!({"model": "test"}),
            topics: vec!["caching".to_string(), "databases".to_string()],
        }
    }

    #[test]
    fn test_summary_creation() {
        let summary = Summary::new(sample_new());

        assert!(!summary.id.is_empty());
        assert_eq!(summary.video_id, "dQw4w9WgXcQ");
        assert_eq!(summary.topics.len(), 2);
        assert_eq!(summary.topics[0].topic, "caching");
        assert_eq!(summary.topics[1].topic, "databases");
        assert!(summary.validate().is_ok());
    }

    #[test]
    fn test_topics_owned_by_summary() {
        let summary = Summary::new(sample_new());

        for topic in &summary.topics {
            assert_eq!(topic.summary_id, summary.id);
            assert!(!topic.id.is_empty());
        }
    }

    #[test]
    fn test_validation_missing_video_id() {
        let mut new = sample_new();
        new.video_id = String::new();
        let summary = Summary::new(new);

        assert!(matches!(
            summary.validate(),
            Err(ValidationError::MissingField(_))
        ));
    }

    #[test]
    fn test_validation_invalid_metadata() {
        let mut new = sample_new();
        new.metadata = json!("not an object");
        let summary = Summary::new(new);

        assert!(matches!(
            summary.validate(),
            Err(ValidationError::InvalidMetadata(_))
        ));
    }

    #[test]
    fn test_summary_text_update() {
        let mut summary = Summary::new(sample_new());
        let original_modified = summary.modified_at;

        summary.set_summary_text("## Updated".to_string());

        assert_eq!(summary.summary_text, "## Updated");
        assert!(summary.modified_at >= original_modified);
    }

    #[test]
    fn test_summary_serialization() {
        let summary = Summary::new(sample_new());

        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: Summary = serde_json::from_str(&json).unwrap();

        assert_eq!(summary, deserialized);

        // camelCase wire format
        let value = serde_json::to_value(&summary).unwrap();
        assert!(value.get("videoId").is_some());
        assert!(value.get("summaryText").is_some());
    }

    #[test]
    fn test_delete_result() {
        assert!(DeleteResult::existed().existed);
        assert!(!DeleteResult::not_found().existed);
    }
}
