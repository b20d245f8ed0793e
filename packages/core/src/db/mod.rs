//! Database Layer
//!
//! This module handles persistence using libsql (embedded
//! SQLite-compatible database):
//!
//! - Connection management and idempotent schema initialization
//! - `SummaryStore` trait abstracting record reads/writes
//! - `TursoStore`, the libsql-backed implementation

mod database;
mod error;
mod summary_store;
mod turso_store;

pub use database::DatabaseService;
pub use error::DatabaseError;
pub use summary_store::SummaryStore;
pub use turso_store::TursoStore;
