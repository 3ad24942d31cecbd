//! Candidate persistence behind a trait so the service can run against
//! PostgreSQL in production and an in-memory vector in tests or local runs.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::candidate::CandidateRecord;

pub mod memory;
pub mod postgres;

pub use memory::MemoryCandidateStore;
pub use postgres::PgCandidateStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("candidate '{0}' already exists")]
    Duplicate(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("stored candidate '{id}' is corrupt: {reason}")]
    CorruptRow { id: String, reason: String },
}

/// Append-only candidate store. Records are never updated or deleted.
#[async_trait]
pub trait CandidateStore: Send + Sync {
    /// Persists one record. Returns only after the write is committed.
    async fn insert(&self, record: &CandidateRecord) -> Result<(), StoreError>;

    /// Every stored record, oldest first.
    async fn list(&self) -> Result<Vec<CandidateRecord>, StoreError>;

    fn backend(&self) -> &'static str;
}
