use async_trait::async_trait;
use serde_json::Value;

pub mod query;
pub mod sanity;
#[cfg(test)]
pub mod memory;

pub use query::Query;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Content store request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Content store answered {status}: {description}")]
    Status { status: u16, description: String },

    #[error("Invalid content store response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read-only access to the document store.
///
/// Implementations return the raw `result` of a query: an array for the card
/// queries, a document or `null` for single-document queries.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn fetch(&self, query: &Query) -> StoreResult<Value>;
}
