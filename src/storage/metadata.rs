use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("insert into `{table}` failed: {message}")]
pub struct MetadataError {
    pub table: String,
    pub message: String,
}

/// Structured-record persistence, append-only from the client's
/// perspective. Records are inserted exactly once and never updated.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    async fn insert(&self, table: &str, record: Value) -> Result<(), MetadataError>;
}
