use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::candidate::CandidateRecord;
use crate::store::{CandidateStore, StoreError};

/// Process-local store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryCandidateStore {
    records: RwLock<Vec<CandidateRecord>>,
}

impl MemoryCandidateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CandidateStore for MemoryCandidateStore {
    async fn insert(&self, record: &CandidateRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id == record.id) {
            return Err(StoreError::Duplicate(record.id.clone()));
        }
        records.push(record.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<CandidateRecord>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
