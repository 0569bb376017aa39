use crate::domain::model::{Money, ReceiptLine, ScanResult};
use crate::domain::ports::ReceiptExtractor;
use crate::error::{Result, SplitError};
use async_trait::async_trait;

/// Deterministic stand-in for the vision extraction collaborator.
///
/// Returns a fixed convenience-store receipt for any image, which keeps the
/// full pipeline runnable without an API key.
#[derive(Default, Clone, Copy)]
pub struct MockExtractor;

impl MockExtractor {
    pub fn new() -> Self {
        Self
    }
}

const SUPPORTED_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

#[async_trait]
impl ReceiptExtractor for MockExtractor {
    async fn extract(&self, _image: &[u8], mime_type: &str) -> Result<ScanResult> {
        if !SUPPORTED_MIME_TYPES.contains(&mime_type) {
            return Err(SplitError::Extraction(format!(
                "unsupported image type '{mime_type}'"
            )));
        }
        Ok(ScanResult {
            merchant: "INDOMARET POINT (MOCK)".to_owned(),
            date: "2025-11-21".to_owned(),
            items: vec![
                ReceiptLine {
                    name: "Aqua 600ml".to_owned(),
                    qty: 2,
                    price: Money::new(3500),
                    total: Money::new(7000),
                },
                ReceiptLine {
                    name: "Sari Roti".to_owned(),
                    qty: 1,
                    price: Money::new(12000),
                    total: Money::new(12000),
                },
            ],
            total_amount: Money::new(19000),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_scan_is_internally_consistent() {
        let scan = MockExtractor::new().extract(&[], "image/jpeg").await.unwrap();
        let line_sum: Money = scan.items.iter().map(|line| line.line_total()).sum();
        assert_eq!(line_sum, scan.total_amount);
    }

    #[tokio::test]
    async fn test_mock_rejects_unsupported_mime() {
        let result = MockExtractor::new().extract(&[], "application/pdf").await;
        assert!(matches!(result, Err(SplitError::Extraction(_))));
    }
}
