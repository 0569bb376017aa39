use crate::domain::model::{SplitOutcome, SplitRecord, SplitRequest};
use crate::domain::ports::SplitStoreBox;
use crate::domain::split::{self, SplitOptions};
use crate::error::Result;
use std::sync::atomic::{AtomicU64, Ordering};

/// Runs split computations and persists their outcomes.
///
/// The allocation itself is a pure function; `SplitService` adds the two
/// things callers need around it: record ids and the hand-off to the storage
/// collaborator. Collaborators are constructor-injected so the service stays
/// testable against an in-memory store.
pub struct SplitService {
    store: SplitStoreBox,
    next_id: AtomicU64,
}

impl SplitService {
    pub fn new(store: SplitStoreBox) -> Self {
        Self {
            store,
            next_id: AtomicU64::new(1),
        }
    }

    /// Computes the split for `request` and persists the outcome.
    ///
    /// All-or-nothing: an invalid request produces an error and nothing is
    /// stored.
    pub async fn process(
        &self,
        request: &SplitRequest,
        options: SplitOptions,
    ) -> Result<SplitOutcome> {
        let outcome = split::compute_split(request, options)?;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.store
            .store(SplitRecord {
                id,
                outcome: outcome.clone(),
            })
            .await?;
        Ok(outcome)
    }

    /// Consumes the service and returns every persisted split.
    pub async fn into_records(self) -> Result<Vec<SplitRecord>> {
        self.store.all().await
    }
}
