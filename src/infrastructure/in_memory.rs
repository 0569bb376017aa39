use crate::domain::model::SplitRecord;
use crate::domain::ports::SplitStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for computed splits.
///
/// Uses `Arc<RwLock<HashMap<u64, SplitRecord>>>` to allow shared concurrent
/// access. Ideal for tests and offline runs where the real persistence
/// collaborator is out of reach.
#[derive(Default, Clone)]
pub struct InMemorySplitStore {
    records: Arc<RwLock<HashMap<u64, SplitRecord>>>,
}

impl InMemorySplitStore {
    /// Creates a new, empty in-memory split store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SplitStore for InMemorySplitStore {
    async fn store(&self, record: SplitRecord) -> Result<()> {
        let mut records = self.records.write().await;
        records.insert(record.id, record);
        Ok(())
    }

    async fn get(&self, id: u64) -> Result<Option<SplitRecord>> {
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn all(&self) -> Result<Vec<SplitRecord>> {
        let records = self.records.read().await;
        let mut all: Vec<SplitRecord> = records.values().cloned().collect();
        all.sort_by_key(|record| record.id);
        Ok(all)
    }
}
