//! Service Layer Error Types
//!
//! This module defines error types for service-layer operations. The
//! distinct kinds matter to callers: a missing record, an unavailable
//! upstream source, and a failed generation each map to different
//! responses at the boundary.

use crate::models::ValidationError;
use thiserror::Error;

/// Service operation errors
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Record not found by id
    #[error("Record not found: {id}")]
    RecordNotFound { id: String },

    /// Upstream source (transcript, chunk stream) failed mid-read
    #[error("Source unavailable: {context}")]
    SourceUnavailable { context: String },

    /// The external generator produced no usable output
    #[error("Generation failed: {context}")]
    GenerationFailed { context: String },

    /// Validation failed for a record
    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    /// Storage operation failed
    #[error("Storage operation failed: {0}")]
    StorageError(#[from] anyhow::Error),
}

impl ServiceError {
    /// Create a record not found error
    pub fn record_not_found(id: impl Into<String>) -> Self {
        Self::RecordNotFound { id: id.into() }
    }

    /// Create a source unavailable error
    pub fn source_unavailable(context: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            context: context.into(),
        }
    }

    /// Create a generation failed error
    pub fn generation_failed(context: impl Into<String>) -> Self {
        Self::GenerationFailed {
            context: context.into(),
        }
    }
}
