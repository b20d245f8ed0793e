//! Business Services
//!
//! This module contains the core business logic services:
//!
//! - `SummaryService` - summary record CRUD and streamed ingest
//! - `MindMapService` - mind map generate-or-fetch orchestration
//!
//! Services coordinate between the database layer and the pure layout
//! core, implementing the decisions neither of those layers should own
//! (when to recompute, what absence of a record means).

pub mod error;
pub mod mindmap_service;
pub mod summary_service;

pub use error::ServiceError;
pub use mindmap_service::MindMapService;
pub use summary_service::{SummaryService, DEFAULT_LIST_LIMIT};

