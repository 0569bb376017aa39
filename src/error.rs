use thiserror::Error;

pub type Result<T> = std::result::Result<T, SplitError>;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("item {index} has negative price {price}")]
    NegativePrice { index: usize, price: i64 },
    #[error("{which} percentage must be non-negative, got {value}")]
    NegativePercent {
        which: &'static str,
        value: rust_decimal::Decimal,
    },
    #[error("item {index} is assigned to unknown participant '{participant}'")]
    UnknownParticipant { index: usize, participant: String },
    #[error("participant '{participant}' appears twice in item {index}")]
    DuplicateAssignment { index: usize, participant: String },
    #[error("scan has {lines} lines but assignment sheet covers {assignments}")]
    LineCountMismatch { lines: usize, assignments: usize },
    #[error("share for '{participant}' does not fit in a currency amount")]
    AmountOverflow { participant: String },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("extraction error: {0}")]
    Extraction(String),
}
