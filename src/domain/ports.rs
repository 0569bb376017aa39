use crate::domain::model::{ScanResult, SplitRecord};
use crate::error::Result;
use async_trait::async_trait;

/// Boxed [`SplitStore`] for dynamic dispatch.
pub type SplitStoreBox = Box<dyn SplitStore>;

/// Boxed [`ReceiptExtractor`] for dynamic dispatch.
pub type ReceiptExtractorBox = Box<dyn ReceiptExtractor>;

/// Persistence collaborator for computed splits.
///
/// The engine never talks to this directly; the service layer hands each
/// outcome over and moves on. Whether storage is a database or a test map is
/// invisible to the rest of the crate.
#[async_trait]
pub trait SplitStore: Send + Sync {
    async fn store(&self, record: SplitRecord) -> Result<()>;
    async fn get(&self, id: u64) -> Result<Option<SplitRecord>>;
    async fn all(&self) -> Result<Vec<SplitRecord>>;
}

/// Vision collaborator that turns a receipt photo into structured line items.
#[async_trait]
pub trait ReceiptExtractor: Send + Sync {
    async fn extract(&self, image: &[u8], mime_type: &str) -> Result<ScanResult>;
}
